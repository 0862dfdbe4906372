use std::fmt::Write as _;

use objconv::wire::Converted;

/// Output truncation and formatting limits for converted values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single object or map.
	pub max_fields_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for sequences.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested values.
	pub max_print_depth: u32,
	/// Skip typed-object fields whose value is `null`.
	pub hide_null_fields: bool,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
			hide_null_fields: true,
		}
	}
}

/// Print a converted value tree on stdout.
pub fn print_value(value: &Converted, options: PrintOptions) {
	print!("{}", render_value(value, options));
}

/// Render a converted value tree as indented text.
pub fn render_value(value: &Converted, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Converted, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Converted::Null => line(out, format_args!("{pad}null")),
		Converted::Bool(v) => line(out, format_args!("{pad}{v}")),
		Converted::Number(v) => line(out, format_args!("{pad}{v}")),
		Converted::String(v) => line(out, format_args!("{pad}\"{}\"", truncate(v, options.max_string_len))),
		Converted::Raw(v) => line(out, format_args!("{pad}raw {}", truncate(&v.to_string(), options.max_string_len))),
		Converted::Seq(items) => {
			if depth >= options.max_print_depth {
				line(out, format_args!("{pad}[... {} items]", items.len()));
				return;
			}
			line(out, format_args!("{pad}["));
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				line(out, format_args!("{pad}  ... {} more", items.len() - options.max_array_items));
			}
			line(out, format_args!("{pad}]"));
		}
		Converted::Map(items) => {
			let entries: Vec<_> = items.iter().map(|(key, value)| (key.as_str(), value)).collect();
			write_entries(out, "map", &entries, indent, depth, options);
		}
		Converted::Object(item) => {
			let entries: Vec<_> = item
				.fields
				.iter()
				.filter(|field| !(options.hide_null_fields && field.value.is_null()))
				.map(|field| (field.name, &field.value))
				.collect();
			write_entries(out, item.type_name(), &entries, indent, depth, options);
		}
	}
}

fn write_entries(out: &mut String, label: &str, entries: &[(&str, &Converted)], indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if depth >= options.max_print_depth {
		line(out, format_args!("{pad}{label} {{ ... }}"));
		return;
	}

	line(out, format_args!("{pad}{label} {{"));
	for (name, value) in entries.iter().take(options.max_fields_per_object) {
		let _ = write!(out, "{pad}  {name} = ");
		if matches!(value, Converted::Seq(_) | Converted::Map(_) | Converted::Object(_)) {
			out.push('\n');
			write_value(out, value, indent + 4, depth + 1, options);
		} else {
			write_value(out, value, 0, depth + 1, options);
		}
	}
	if entries.len() > options.max_fields_per_object {
		line(out, format_args!("{pad}  ... {} more fields", entries.len() - options.max_fields_per_object));
	}
	line(out, format_args!("{pad}}}"));
}

fn line(out: &mut String, args: std::fmt::Arguments<'_>) {
	let _ = out.write_fmt(args);
	out.push('\n');
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
