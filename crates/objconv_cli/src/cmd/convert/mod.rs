use std::io::Read as _;
use std::path::{Path, PathBuf};

use objconv::wire::{ConvertOptions, Converter, DiagnosticSink, RecordingSink, Registry, TracingSink};
use serde::Serialize;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, inspect_json};
use crate::cmd::{CliError, Result};

const STDIN_PATH: &str = "-";

#[derive(clap::Args)]
pub struct Args {
	/// Wire JSON document; `-` or omitted reads stdin.
	pub input: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "no-diagnostics")]
	pub no_diagnostics: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "show-null")]
	pub show_null: bool,
}

#[derive(Serialize)]
struct ConvertJson {
	input: String,
	diagnostics: Vec<String>,
	value: serde_json::Value,
}

/// Convert a wire JSON document and print the converted tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		json,
		no_diagnostics,
		max_depth,
		max_array,
		show_null,
	} = args;

	let path = input.unwrap_or_else(|| PathBuf::from(STDIN_PATH));
	let document = read_document(&path)?;

	let sink = RecordingSink::new();
	let converter = Converter::new(Registry::builtin())
		.with_options(ConvertOptions { diagnostics: !no_diagnostics })
		.with_sink(&sink);
	let value = converter.convert(&document);

	let diagnostics = sink.take();
	for item in &diagnostics {
		TracingSink.report(item.clone());
	}

	if json {
		emit_json(&ConvertJson {
			input: path.display().to_string(),
			diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
			value: inspect_json(&value),
		});
		return Ok(());
	}

	let mut print = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}
	print.hide_null_fields = !show_null;

	println!("input: {}", path.display());
	println!("diagnostics: {}", diagnostics.len());
	println!("converted:");
	print_value(&value, print);

	Ok(())
}

fn read_document(path: &Path) -> Result<serde_json::Value> {
	let bytes = if path == Path::new(STDIN_PATH) {
		let mut buf = Vec::new();
		std::io::stdin().read_to_end(&mut buf).map_err(|source| CliError::Read {
			path: path.to_owned(),
			source,
		})?;
		buf
	} else {
		std::fs::read(path).map_err(|source| CliError::Read {
			path: path.to_owned(),
			source,
		})?
	};

	serde_json::from_slice(&bytes).map_err(|source| CliError::Parse {
		path: path.to_owned(),
		source,
	})
}
