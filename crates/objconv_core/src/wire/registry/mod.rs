use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::wire::finalize::hook_for;
use crate::wire::{Converted, FieldValue, ObjectKind, OpaqueFields, RegistryError, Result, TypedObject, type_name_for};

/// Wire key carrying the object discriminator.
pub const DISCRIMINATOR_FIELD: &str = "object";

/// Post-construction fixup applied to a freshly populated instance.
pub type FinalizeFn = fn(&mut TypedObject);

/// Registry entry describing one target type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
	/// Catalogue kind.
	pub kind: ObjectKind,
	/// Wire discriminator value.
	pub discriminator: &'static str,
	/// Target type name.
	pub type_name: &'static str,
	/// Declared field names, in declaration order.
	pub fields: &'static [&'static str],
	/// Optional type-specific fixup run after field population.
	pub finalize: Option<FinalizeFn>,
}

impl TypeDescriptor {
	/// Descriptor for one catalogue kind, with its builtin finalize hook.
	pub fn for_kind(kind: ObjectKind) -> Self {
		Self {
			kind,
			discriminator: kind.discriminator(),
			type_name: kind.type_name(),
			fields: kind.fields(),
			finalize: hook_for(kind),
		}
	}

	/// Build an instance with every declared field present and `Null`.
	pub fn instantiate(&self) -> TypedObject {
		TypedObject {
			kind: self.kind,
			fields: self
				.fields
				.iter()
				.map(|name| FieldValue {
					name: *name,
					value: Converted::Null,
				})
				.collect(),
		}
	}

	/// Whether `field` is a declared field name.
	pub fn declares(&self, field: &str) -> bool {
		self.fields.iter().any(|item| *item == field)
	}

	/// Run the finalize hook, if any.
	pub fn finalize(&self, object: &mut TypedObject) {
		if let Some(hook) = self.finalize {
			hook(object);
		}
	}
}

/// Immutable discriminator -> descriptor lookup.
#[derive(Debug)]
pub struct Registry {
	descriptors: Vec<TypeDescriptor>,
	by_discriminator: HashMap<&'static str, usize>,
	opaque: OpaqueFields,
}

static BUILTIN: OnceLock<Registry> = OnceLock::new();

impl Registry {
	/// Validate a catalogue and build a registry over it.
	pub fn new(kinds: &[ObjectKind], opaque: OpaqueFields) -> Result<Self> {
		if opaque.iter().any(str::is_empty) {
			return Err(RegistryError::EmptyOpaqueField);
		}

		let mut descriptors = Vec::with_capacity(kinds.len());
		let mut by_discriminator = HashMap::with_capacity(kinds.len());
		let mut type_names = HashSet::with_capacity(kinds.len());

		for kind in kinds {
			let descriptor = TypeDescriptor::for_kind(*kind);
			check_descriptor(&descriptor)?;

			if by_discriminator.insert(descriptor.discriminator, descriptors.len()).is_some() {
				return Err(RegistryError::DuplicateDiscriminator {
					discriminator: descriptor.discriminator,
				});
			}
			if !type_names.insert(descriptor.type_name) {
				return Err(RegistryError::DuplicateTypeName {
					type_name: descriptor.type_name,
				});
			}
			descriptors.push(descriptor);
		}

		Ok(Self {
			descriptors,
			by_discriminator,
			opaque,
		})
	}

	/// Registry over the full catalogue and the builtin opaque field set.
	///
	/// Built on first use. Panics if the compiled-in catalogue fails validation.
	pub fn builtin() -> &'static Registry {
		BUILTIN.get_or_init(|| {
			Self::new(ObjectKind::ALL, OpaqueFields::builtin()).unwrap_or_else(|err| panic!("builtin object catalogue is invalid: {err}"))
		})
	}

	/// Look up the descriptor for a discriminator.
	pub fn resolve(&self, discriminator: &str) -> Option<&TypeDescriptor> {
		self.by_discriminator.get(discriminator).map(|index| &self.descriptors[*index])
	}

	/// Convertible descriptors in catalogue order.
	///
	/// Entries whose discriminator also appears in the opaque field set are pass-through only and
	/// are left out.
	pub fn enumerate(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
		self.descriptors.iter().filter(|item| !self.opaque.contains(item.discriminator))
	}

	/// Every registered descriptor, including pass-through entries.
	pub fn descriptors(&self) -> &[TypeDescriptor] {
		&self.descriptors
	}

	/// Opaque field set consulted during typed conversion.
	pub fn opaque(&self) -> &OpaqueFields {
		&self.opaque
	}

	/// Number of registered descriptors.
	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	/// Whether no descriptors are registered.
	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}
}

/// Every convertible builtin target type, for bulk encoder registration.
pub fn enumerate_convertible_types() -> Vec<&'static TypeDescriptor> {
	Registry::builtin().enumerate().collect()
}

fn check_descriptor(descriptor: &TypeDescriptor) -> Result<()> {
	let expected = type_name_for(descriptor.discriminator);
	if expected != descriptor.type_name {
		return Err(RegistryError::TypeNameMismatch {
			discriminator: descriptor.discriminator,
			declared: descriptor.type_name,
			expected,
		});
	}

	let mut seen = HashSet::with_capacity(descriptor.fields.len());
	for field in descriptor.fields {
		if field.is_empty() {
			return Err(RegistryError::EmptyField {
				type_name: descriptor.type_name,
			});
		}
		if *field == DISCRIMINATOR_FIELD {
			return Err(RegistryError::DeclaresDiscriminator {
				type_name: descriptor.type_name,
				field: DISCRIMINATOR_FIELD,
			});
		}
		if !seen.insert(*field) {
			return Err(RegistryError::DuplicateField {
				type_name: descriptor.type_name,
				field: *field,
			});
		}
	}
	Ok(())
}
