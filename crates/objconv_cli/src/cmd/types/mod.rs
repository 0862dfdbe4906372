use objconv::wire::enumerate_convertible_types;
use serde::Serialize;

use crate::cmd::Result;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct TypesJson {
	count: usize,
	types: Vec<TypeJson>,
}

#[derive(Serialize)]
struct TypeJson {
	object: &'static str,
	type_name: &'static str,
	field_count: usize,
}

/// List every convertible target type in catalogue order.
pub fn run(args: Args) -> Result<()> {
	let types = enumerate_convertible_types();

	if args.json {
		emit_json(&TypesJson {
			count: types.len(),
			types: types
				.iter()
				.map(|item| TypeJson {
					object: item.discriminator,
					type_name: item.type_name,
					field_count: item.fields.len(),
				})
				.collect(),
		});
		return Ok(());
	}

	println!("types: {}", types.len());
	println!("object\ttype\tfields");
	for item in &types {
		println!("{}\t{}\t{}", item.discriminator, item.type_name, item.fields.len());
	}
	Ok(())
}
