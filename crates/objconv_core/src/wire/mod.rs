mod catalogue;
mod convert;
mod diagnostics;
mod error;
mod finalize;
mod naming;
mod opaque;
mod registry;
mod value;

/// Closed catalogue of supported object kinds.
pub use catalogue::ObjectKind;
/// Recursive conversion entry points and options.
pub use convert::{ConvertOptions, Converter, convert_result};
/// Non-fatal conversion diagnostics and sinks.
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
/// Error and result aliases.
pub use error::{RegistryError, Result};
/// Discriminator-to-type naming transform.
pub use naming::type_name_for;
/// Opaque pass-through field set.
pub use opaque::{BUILTIN_OPAQUE_FIELDS, OpaqueFields};
/// Type registry, descriptors, and enumeration.
pub use registry::{DISCRIMINATOR_FIELD, FinalizeFn, Registry, TypeDescriptor, enumerate_convertible_types};
/// Converted runtime value types.
pub use value::{Converted, FieldValue, GenericMap, Symbol, TypedObject};
