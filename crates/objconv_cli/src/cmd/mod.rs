/// Convert a wire JSON document and print the result.
pub mod convert;
/// Resolve one discriminator and list its declared fields.
pub mod fields;
/// Text rendering of converted values.
pub mod print;
/// List every convertible target type.
pub mod types;
/// Shared CLI helpers.
pub mod util;

mod error;

pub use error::{CliError, Result};

#[cfg(test)]
mod test_support;
