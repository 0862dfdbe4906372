#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "objconv", about = "Wire JSON to typed API object conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Convert(cmd::convert::Args),
	Types(cmd::types::Args),
	Fields(cmd::fields::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Types(args) => cmd::types::run(args),
		Commands::Fields(args) => cmd::fields::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
