use std::path::PathBuf;

use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `objconv` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input could not be read.
	#[error("read {path}: {source}")]
	Read {
		/// Input path, `-` for stdin.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Input was not valid JSON.
	#[error("parse {path}: {source}")]
	Parse {
		/// Input path, `-` for stdin.
		path: PathBuf,
		/// Underlying parse failure.
		source: serde_json::Error,
	},
	/// Discriminator is not in the registry.
	#[error("unknown object kind: {object}")]
	UnknownObject {
		/// Requested discriminator.
		object: String,
	},
}
