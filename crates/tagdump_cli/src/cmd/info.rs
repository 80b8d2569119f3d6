use std::path::PathBuf;

use serde::Serialize;
use tagdump::store::{Group, StoreFile};

use crate::cmd::Result;

#[derive(Debug, Serialize)]
struct InfoJson {
	path: String,
	format_version: u16,
	nodes: Vec<NodeInfoJson>,
}

#[derive(Debug, Serialize)]
struct NodeInfoJson {
	name: String,
	#[serde(rename = "type")]
	type_tag: Option<String>,
	subtype: Option<String>,
	payload: String,
	compression: &'static str,
}

/// List each node's tags, payload shape, and storage compression.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let file = StoreFile::open(&path)?;
	let nodes = describe_nodes(&file)?;

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			format_version: file.header.format_version,
			nodes,
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("format_version: {}", file.header.format_version);
	println!("nodes: {}", nodes.len());
	for node in &nodes {
		let subtype = node.subtype.as_deref().map(|s| format!(" subtype={s}")).unwrap_or_default();
		println!(
			"{} type={}{} payload={} compression={}",
			node.name,
			node.type_tag.as_deref().unwrap_or("<missing>"),
			subtype,
			node.payload,
			node.compression
		);
	}
	Ok(())
}

fn describe_nodes(file: &StoreFile) -> Result<Vec<NodeInfoJson>> {
	let mut out = Vec::with_capacity(file.group.len());
	for handle in file.group.handles() {
		let node = file.group.read(handle)?;
		out.push(NodeInfoJson {
			type_tag: node.type_tag().map(|tag| String::from_utf8_lossy(tag).into_owned()),
			subtype: node.subtype_tag().map(|tag| String::from_utf8_lossy(tag).into_owned()),
			payload: node.payload.describe(),
			compression: file.group.compression_of(handle)?.as_str(),
			name: node.name,
		});
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use tagdump::store::{StorageOptions, StoreFile, StoreHeader, Value};

	use super::describe_nodes;
	use crate::cmd::dump::encode_all;

	#[test]
	fn describes_tags_and_compression() {
		let values = vec![Value::List(vec![Value::Int(1), Value::Int(2)]), Value::Bool(false), Value::None];
		let group = encode_all(&values, &StorageOptions::with_level(3)).expect("encode");
		let bytes = StoreFile::to_bytes(&group).expect("image");
		let file = StoreFile::parse(&bytes, Default::default()).expect("parse");
		assert_eq!(file.header, StoreHeader::current());

		let nodes = describe_nodes(&file).expect("describe");
		assert_eq!(nodes.len(), 3);

		assert_eq!(nodes[0].name, "data_0");
		assert_eq!(nodes[0].type_tag.as_deref(), Some("<class 'list'>"));
		assert_eq!(nodes[0].payload, "int64[2]");
		assert_eq!(nodes[0].compression, "zstd");

		assert_eq!(nodes[1].type_tag.as_deref(), Some("python_dtype"));
		assert_eq!(nodes[1].subtype.as_deref(), Some("<class 'bool'>"));
		assert_eq!(nodes[1].payload, "scalar bool");
		assert_eq!(nodes[1].compression, "none");

		assert_eq!(nodes[2].type_tag.as_deref(), Some("none"));
		assert_eq!(nodes[2].compression, "none");
	}
}
