use serde::Serialize;
use serde_json::{Map, Value};

use objconv::wire::Converted;

/// Print a serializable payload as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}

/// Inspection view of a converted value.
///
/// Typed objects render as `{"$type": ..., "fields": {...}}` and opaque values as `{"$raw": ...}`.
/// This is a debugging view, not a wire encoding.
pub fn inspect_json(value: &Converted) -> Value {
	match value {
		Converted::Null => Value::Null,
		Converted::Bool(value) => Value::Bool(*value),
		Converted::Number(value) => Value::Number(value.clone()),
		Converted::String(value) => Value::String(value.to_string()),
		Converted::Seq(items) => Value::Array(items.iter().map(inspect_json).collect()),
		Converted::Map(items) => Value::Object(items.iter().map(|(key, value)| (key.to_string(), inspect_json(value))).collect()),
		Converted::Object(item) => {
			let fields: Map<String, Value> = item
				.fields
				.iter()
				.map(|field| (field.name.to_owned(), inspect_json(&field.value)))
				.collect();
			let mut out = Map::new();
			out.insert("$type".to_owned(), Value::String(item.type_name().to_owned()));
			out.insert("fields".to_owned(), Value::Object(fields));
			Value::Object(out)
		}
		Converted::Raw(raw) => {
			let mut out = Map::new();
			out.insert("$raw".to_owned(), raw.clone());
			Value::Object(out)
		}
	}
}
