use std::fs;
use std::path::{Path, PathBuf};

use tagdump::store::{MemGroup, Registry, StorageOptions, StoreFile, Value};
use tracing::info;

use crate::cmd::{CliError, Result};

/// Encode the JSON array in `values` into a store file at `out`.
pub fn run(out: PathBuf, values: PathBuf, compress: Option<i32>) -> Result<()> {
	let parsed = read_values(&values)?;
	let options = StorageOptions { compression: compress };
	let group = encode_all(&parsed, &options)?;
	StoreFile::save(&group, &out)?;

	info!(nodes = group.len(), path = %out.display(), "dump complete");
	println!("wrote {} nodes to {}", group.len(), out.display());
	Ok(())
}

/// Parse a JSON array of values.
pub(crate) fn read_values(path: &Path) -> Result<Vec<Value>> {
	let raw = fs::read(path)?;
	let doc: serde_json::Value = serde_json::from_slice(&raw)?;
	if !doc.is_array() {
		return Err(CliError::NotAnArray {
			path: path.display().to_string(),
		});
	}
	Ok(serde_json::from_value(doc)?)
}

/// Encode `values` at positions `0..n` into a fresh group.
pub(crate) fn encode_all(values: &[Value], options: &StorageOptions) -> Result<MemGroup> {
	let registry = Registry::global();
	let mut group = MemGroup::new();
	for (position, value) in values.iter().enumerate() {
		registry.encode(value, &mut group, position, options)?;
	}
	Ok(group)
}
