use thiserror::Error;

/// Store file encode command.
pub mod dump;
/// Node listing command.
pub mod info;
/// Store file decode command.
pub mod load;
/// Value rendering helpers.
pub mod print;

#[cfg(test)]
mod test_support;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Core store failure.
	#[error(transparent)]
	Store(#[from] tagdump::store::StoreError),
	/// Input or output JSON failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Filesystem failure outside the store.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input file was valid JSON but not an array of values.
	#[error("expected a JSON array of values in {path}")]
	NotAnArray {
		/// Input path.
		path: String,
	},
}
