use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced while building a type registry from a catalogue.
///
/// These are configuration faults in the catalogue itself; conversion never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Two kinds share the same wire discriminator.
	#[error("duplicate discriminator {discriminator:?}")]
	DuplicateDiscriminator {
		/// Offending discriminator value.
		discriminator: &'static str,
	},
	/// Two kinds share the same target type name.
	#[error("duplicate type name {type_name}")]
	DuplicateTypeName {
		/// Offending type name.
		type_name: &'static str,
	},
	/// A kind declares the same field twice.
	#[error("{type_name} declares field {field:?} more than once")]
	DuplicateField {
		/// Declaring type name.
		type_name: &'static str,
		/// Repeated field name.
		field: &'static str,
	},
	/// A kind declares an empty field name.
	#[error("{type_name} declares an empty field name")]
	EmptyField {
		/// Declaring type name.
		type_name: &'static str,
	},
	/// A kind declares the discriminator key as a regular field.
	#[error("{type_name} declares the discriminator field {field:?}")]
	DeclaresDiscriminator {
		/// Declaring type name.
		type_name: &'static str,
		/// Discriminator key name.
		field: &'static str,
	},
	/// Catalogue type name disagrees with the naming transform.
	#[error("type name for {discriminator:?} is {declared}, expected {expected}")]
	TypeNameMismatch {
		/// Wire discriminator.
		discriminator: &'static str,
		/// Type name recorded in the catalogue.
		declared: &'static str,
		/// Type name produced by the naming transform.
		expected: String,
	},
	/// Opaque field set contains an empty name.
	#[error("opaque field set contains an empty name")]
	EmptyOpaqueField,
}
