use serde_json::{Map, Value};

use crate::wire::diagnostics::extra_keys;
use crate::wire::{Converted, DISCRIMINATOR_FIELD, Diagnostic, DiagnosticSink, GenericMap, Registry, Symbol, TracingSink, TypeDescriptor, TypedObject};

/// Runtime switches for conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
	/// Report unknown discriminators and undeclared keys.
	///
	/// Has no effect when the `diagnostics` cargo feature is disabled.
	pub diagnostics: bool,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			diagnostics: cfg!(debug_assertions),
		}
	}
}

impl ConvertOptions {
	/// Diagnostics on, regardless of build profile.
	pub fn verbose() -> Self {
		Self { diagnostics: true }
	}

	/// Diagnostics off, regardless of build profile.
	pub fn quiet() -> Self {
		Self { diagnostics: false }
	}
}

/// Recursive converter from decoded wire JSON to [`Converted`] values.
///
/// Conversion is total: every input shape yields a value and nothing is mutated.
#[derive(Debug, Clone)]
pub struct Converter<'r, S = TracingSink> {
	registry: &'r Registry,
	options: ConvertOptions,
	sink: S,
}

impl<'r> Converter<'r, TracingSink> {
	/// Converter over `registry` with default options, reporting through `tracing`.
	pub fn new(registry: &'r Registry) -> Self {
		Self {
			registry,
			options: ConvertOptions::default(),
			sink: TracingSink,
		}
	}
}

impl<'r, S: DiagnosticSink> Converter<'r, S> {
	/// Replace conversion options.
	pub fn with_options(mut self, options: ConvertOptions) -> Self {
		self.options = options;
		self
	}

	/// Replace the diagnostic sink.
	pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Converter<'r, T> {
		Converter {
			registry: self.registry,
			options: self.options,
			sink,
		}
	}

	/// Registry used for discriminator lookup.
	pub fn registry(&self) -> &'r Registry {
		self.registry
	}

	/// Active options.
	pub fn options(&self) -> &ConvertOptions {
		&self.options
	}

	/// Convert any dynamic value.
	pub fn convert(&self, value: &Value) -> Converted {
		match value {
			Value::Object(record) => self.convert_record(record),
			Value::Array(items) => Converted::Seq(items.iter().map(|item| self.convert(item)).collect()),
			Value::Null => Converted::Null,
			Value::Bool(value) => Converted::Bool(*value),
			Value::Number(value) => Converted::Number(value.clone()),
			Value::String(value) => Converted::String(value.as_str().into()),
		}
	}

	/// Convert a record as a generic map: normalized keys, recursively converted values.
	pub fn convert_generic(&self, record: &Map<String, Value>) -> GenericMap {
		record.iter().map(|(key, value)| (Symbol::new(key), self.convert(value))).collect()
	}

	/// Convert a record into the target type `descriptor` describes.
	///
	/// Undeclared wire keys are dropped; declared keys missing from the record or sent as `null` stay `Null`.
	pub fn convert_typed(&self, record: &Map<String, Value>, descriptor: &TypeDescriptor) -> TypedObject {
		if self.diagnostics_enabled() {
			let keys = extra_keys(record, descriptor);
			if !keys.is_empty() {
				self.sink.report(Diagnostic::ExtraKeys {
					type_name: descriptor.type_name,
					keys,
				});
			}
		}

		let opaque = self.registry.opaque();
		let mut object = descriptor.instantiate();
		for field in &mut object.fields {
			let Some(raw) = record.get(field.name) else {
				continue;
			};
			field.value = if raw.is_null() {
				Converted::Null
			} else if opaque.contains(field.name) {
				Converted::Raw(raw.clone())
			} else {
				self.convert(raw)
			};
		}

		descriptor.finalize(&mut object);
		object
	}

	fn convert_record(&self, record: &Map<String, Value>) -> Converted {
		// A non-string discriminator counts as no discriminator.
		let Some(Value::String(discriminator)) = record.get(DISCRIMINATOR_FIELD) else {
			return Converted::Map(self.convert_generic(record));
		};

		match self.registry.resolve(discriminator) {
			Some(descriptor) => Converted::Object(self.convert_typed(record, descriptor)),
			None => {
				if self.diagnostics_enabled() {
					self.sink.report(Diagnostic::UnknownObject {
						object: discriminator.clone(),
					});
				}
				Converted::Map(self.convert_generic(record))
			}
		}
	}

	fn diagnostics_enabled(&self) -> bool {
		cfg!(feature = "diagnostics") && self.options.diagnostics
	}
}

/// Convert a decoded API response with the builtin registry and default options.
pub fn convert_result(value: &Value) -> Converted {
	Converter::new(Registry::builtin()).convert(value)
}

#[cfg(test)]
mod tests;
