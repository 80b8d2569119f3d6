use std::path::{Path, PathBuf};

use serde::Serialize;
use tagdump::store::{Registry, StoreFile, Value, node_name};
use tracing::info;

use crate::cmd::Result;
use crate::cmd::print::{PrintOptions, render_value};

#[derive(Serialize)]
struct LoadJson {
	path: String,
	values: Vec<LoadedValueJson>,
}

#[derive(Serialize)]
struct LoadedValueJson {
	name: String,
	kind: &'static str,
	value: Value,
}

/// Decode every `data_<i>` node of a store file in position order.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let values = load_all(&path)?;
	info!(path = %path.display(), values = values.len(), "loaded store file");

	if json {
		let payload = LoadJson {
			path: path.display().to_string(),
			values: values
				.into_iter()
				.enumerate()
				.map(|(position, value)| LoadedValueJson {
					name: node_name(position),
					kind: value.kind().as_str(),
					value,
				})
				.collect(),
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	let options = PrintOptions::default();
	for (position, value) in values.iter().enumerate() {
		println!("{}: {}", node_name(position), render_value(value, options));
	}
	Ok(())
}

/// Open `path` and decode positions `0..len` through the global registry.
pub(crate) fn load_all(path: &Path) -> Result<Vec<Value>> {
	let file = StoreFile::open(path)?;
	let registry = Registry::global();
	let mut values = Vec::with_capacity(file.group.len());
	for position in 0..file.group.len() {
		values.push(registry.decode_child(&file.group, position)?);
	}
	Ok(values)
}

#[cfg(test)]
mod tests {
	use tagdump::store::{StorageOptions, StoreError, StoreFile, Value};
	use tagdump_testkit::scratch_dir;

	use super::load_all;
	use crate::cmd::CliError;
	use crate::cmd::dump::encode_all;

	#[test]
	fn loads_values_in_position_order() {
		let values = vec![Value::from("first"), Value::Int(2), Value::Tuple(vec![Value::Float(0.5)])];
		let group = encode_all(&values, &StorageOptions::default()).expect("encode");
		let dir = scratch_dir();
		let path = dir.path().join("load_order.tagdump");
		StoreFile::save(&group, &path).expect("save");

		assert_eq!(load_all(&path).expect("load"), values);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = scratch_dir();
		let path = dir.path().join("load_missing.tagdump");

		let err = load_all(&path).expect_err("missing file");
		assert!(matches!(err, CliError::Store(StoreError::Io(_))));
	}
}
