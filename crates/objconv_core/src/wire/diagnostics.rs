use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::wire::{DISCRIMINATOR_FIELD, TypeDescriptor};

/// Non-fatal finding reported while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// Record carried a discriminator missing from the registry.
	UnknownObject {
		/// Unrecognized discriminator value.
		object: String,
	},
	/// Record carried keys its target type does not declare.
	ExtraKeys {
		/// Target type the record converted into.
		type_name: &'static str,
		/// Ignored wire keys, sorted.
		keys: Vec<String>,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownObject { object } => write!(f, "unknown object kind {object:?}; converted as generic map"),
			Self::ExtraKeys { type_name, keys } => write!(f, "{type_name} ignored undeclared keys: {}", keys.join(", ")),
		}
	}
}

/// Receiver for conversion diagnostics.
pub trait DiagnosticSink: Send + Sync {
	/// Record one diagnostic.
	fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
	fn report(&self, diagnostic: Diagnostic) {
		(**self).report(diagnostic);
	}
}

/// Emits diagnostics as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, diagnostic: Diagnostic) {
		match &diagnostic {
			Diagnostic::UnknownObject { object } => {
				tracing::warn!(object = %object, "{diagnostic}");
			}
			Diagnostic::ExtraKeys { type_name, keys } => {
				tracing::warn!(type_name = %type_name, keys = ?keys, "{diagnostic}");
			}
		}
	}
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
	fn report(&self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics in report order.
#[derive(Debug, Default)]
pub struct RecordingSink {
	items: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Copy of everything reported so far.
	pub fn snapshot(&self) -> Vec<Diagnostic> {
		self.items.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Drain everything reported so far.
	pub fn take(&self) -> Vec<Diagnostic> {
		std::mem::take(&mut *self.items.lock().unwrap_or_else(PoisonError::into_inner))
	}
}

impl DiagnosticSink for RecordingSink {
	fn report(&self, diagnostic: Diagnostic) {
		self.items.lock().unwrap_or_else(PoisonError::into_inner).push(diagnostic);
	}
}

/// Wire keys that `descriptor` does not declare, sorted. The discriminator key is always accepted.
pub(crate) fn extra_keys(record: &Map<String, Value>, descriptor: &TypeDescriptor) -> Vec<String> {
	let mut keys: Vec<String> = record
		.keys()
		.filter(|key| key.as_str() != DISCRIMINATOR_FIELD && !descriptor.declares(key))
		.cloned()
		.collect();
	keys.sort_unstable();
	keys
}
