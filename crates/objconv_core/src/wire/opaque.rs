use std::collections::BTreeSet;

/// Field names whose values are copied through unconverted, whatever their shape.
///
/// `metadata` holds caller-defined keys; `supported_bank_account_currencies` maps country codes to
/// currency lists and must keep its string keys.
pub const BUILTIN_OPAQUE_FIELDS: &[&str] = &["metadata", "supported_bank_account_currencies"];

/// Process-wide set of opaque field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueFields {
	names: BTreeSet<&'static str>,
}

impl OpaqueFields {
	/// Build a set from explicit names.
	pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
		Self {
			names: names.into_iter().collect(),
		}
	}

	/// The builtin opaque field set.
	pub fn builtin() -> Self {
		Self::new(BUILTIN_OPAQUE_FIELDS.iter().copied())
	}

	/// Whether `name` is passed through unconverted.
	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	/// Iterate names in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.names.iter().copied()
	}

	/// Number of names in the set.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Whether the set is empty.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl Default for OpaqueFields {
	fn default() -> Self {
		Self::builtin()
	}
}
