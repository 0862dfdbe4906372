use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Number;

use crate::wire::ObjectKind;

/// Result of converting one dynamic wire value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Converted {
	#[default]
	Null,
	Bool(bool),
	Number(Number),
	String(Box<str>),
	Seq(Vec<Converted>),
	/// Record without a resolvable discriminator.
	Map(GenericMap),
	/// Record converted into its target type.
	Object(TypedObject),
	/// Opaque field value, exactly as it arrived.
	Raw(serde_json::Value),
}

/// Generic record with normalized keys.
pub type GenericMap = BTreeMap<Symbol, Converted>;

/// Normalized record key.
///
/// Normalization is exact: the wire key text is kept byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Box<str>);

impl Symbol {
	/// Normalize a wire key.
	pub fn new(name: &str) -> Self {
		Self(name.into())
	}

	/// Key text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Symbol {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Symbol {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Instance of a catalogue target type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedObject {
	/// Object kind this instance belongs to.
	pub kind: ObjectKind,
	/// Declared fields, in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One declared field of a [`TypedObject`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Declared field name.
	pub name: &'static str,
	/// Converted field value; `Null` when the wire record lacked the key.
	pub value: Converted,
}

impl TypedObject {
	/// Target type name of this instance.
	pub fn type_name(&self) -> &'static str {
		self.kind.type_name()
	}

	/// Look up a declared field value.
	pub fn get(&self, name: &str) -> Option<&Converted> {
		self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
	}

	/// Mutable access to a declared field value.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Converted> {
		self.fields.iter_mut().find(|field| field.name == name).map(|field| &mut field.value)
	}

	/// Replace a declared field value. Returns `false` for undeclared names.
	pub fn set(&mut self, name: &str, value: Converted) -> bool {
		match self.get_mut(name) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}

	/// Move a declared field value out, leaving `Null` behind.
	pub fn take(&mut self, name: &str) -> Option<Converted> {
		self.get_mut(name).map(std::mem::take)
	}
}

impl Converted {
	/// Short name of the value shape, for messages.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Seq(_) => "seq",
			Self::Map(_) => "map",
			Self::Object(_) => "object",
			Self::Raw(_) => "raw",
		}
	}

	/// Whether this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow as a typed object.
	pub fn as_object(&self) -> Option<&TypedObject> {
		match self {
			Self::Object(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as a typed object of `kind`.
	pub fn as_object_of(&self, kind: ObjectKind) -> Option<&TypedObject> {
		self.as_object().filter(|item| item.kind == kind)
	}

	/// Borrow as a generic map.
	pub fn as_map(&self) -> Option<&GenericMap> {
		match self {
			Self::Map(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow as a sequence.
	pub fn as_seq(&self) -> Option<&[Converted]> {
		match self {
			Self::Seq(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Borrow as a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value.as_ref()),
			_ => None,
		}
	}

	/// Read as an unsigned integer.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Number(value) => value.as_u64(),
			_ => None,
		}
	}
}
