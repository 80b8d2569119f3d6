//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Fresh temporary directory for test artifacts, removed when the guard drops.
///
/// Callers hold the returned [`TempDir`] for as long as they use paths inside it.
pub fn scratch_dir() -> TempDir {
	tempfile::Builder::new().prefix("tagdump-").tempdir().expect("temporary directory is creatable")
}

/// JSON document covering every built-in value kind, in the CLI input format.
pub fn sample_values_json() -> serde_json::Value {
	serde_json::json!([
		{ "list": [{ "int": 1 }, { "int": 2 }, { "int": 3 }] },
		{ "tuple": [{ "str": "a" }, { "str": "b" }] },
		{ "set": [{ "int": 1 }, { "int": 2 }, { "int": 2 }, { "int": 3 }] },
		{ "bytes": [97, 98] },
		{ "str": "ab" },
		{ "int": -42 },
		{ "float": 2.5 },
		{ "bool": true },
		{ "complex": { "re": 3.0, "im": 4.0 } },
		"none"
	])
}

/// Write [`sample_values_json`] to `name` inside `dir` and return its path.
pub fn write_sample_values(dir: &Path, name: &str) -> PathBuf {
	let path = dir.join(name);
	let body = serde_json::to_vec_pretty(&sample_values_json()).expect("sample json serializes");
	fs::write(&path, body).expect("sample json is writable");
	path
}

#[cfg(test)]
mod tests {
	use super::{scratch_dir, write_sample_values};

	#[test]
	fn scratch_dirs_are_distinct_and_removed_on_drop() {
		let first = scratch_dir();
		let second = scratch_dir();
		assert_ne!(first.path(), second.path());

		let sample = write_sample_values(first.path(), "values.json");
		assert!(sample.is_file());

		let root = first.path().to_path_buf();
		drop(first);
		assert!(!root.exists());
		assert!(second.path().is_dir());
	}
}
