use objconv::wire::Registry;
use serde::Serialize;

use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Wire discriminator, e.g. `card` or `checkout.session`.
	pub object: String,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct FieldsJson {
	object: &'static str,
	type_name: &'static str,
	has_finalize: bool,
	fields: Vec<FieldJson>,
}

#[derive(Serialize)]
struct FieldJson {
	name: &'static str,
	opaque: bool,
}

/// Resolve one discriminator and print its declared fields.
pub fn run(args: Args) -> Result<()> {
	let registry = Registry::builtin();
	let descriptor = registry.resolve(&args.object).ok_or(CliError::UnknownObject { object: args.object })?;
	let opaque = registry.opaque();

	if args.json {
		emit_json(&FieldsJson {
			object: descriptor.discriminator,
			type_name: descriptor.type_name,
			has_finalize: descriptor.finalize.is_some(),
			fields: descriptor
				.fields
				.iter()
				.map(|name| FieldJson {
					name: *name,
					opaque: opaque.contains(name),
				})
				.collect(),
		});
		return Ok(());
	}

	println!("object: {}", descriptor.discriminator);
	println!("type: {}", descriptor.type_name);
	println!("finalize: {}", descriptor.finalize.is_some());
	println!("field_count: {}", descriptor.fields.len());
	for name in descriptor.fields {
		if opaque.contains(name) {
			println!("  {name} (opaque)");
		} else {
			println!("  {name}");
		}
	}
	Ok(())
}
