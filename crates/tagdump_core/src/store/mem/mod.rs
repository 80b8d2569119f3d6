use std::collections::HashMap;

use tracing::debug;

use crate::store::compression::{decode_bytes, encode_bytes};
use crate::store::wire::{decode_payload, encode_payload};
use crate::store::{Attributes, Compression, Group, Node, NodeHandle, Payload, ReadOptions, Result, StorageOptions, StoreError};

/// Node as held by [`MemGroup`]: attributes plus serialized, possibly compressed, payload bytes.
#[derive(Debug, Clone)]
pub struct StoredNode {
	/// Child name.
	pub name: String,
	/// Node attributes.
	pub attrs: Attributes,
	/// Compression applied to `bytes`.
	pub compression: Compression,
	/// Serialized payload after compression.
	pub bytes: Vec<u8>,
}

/// In-memory group keeping children in creation order.
#[derive(Debug, Default)]
pub struct MemGroup {
	nodes: Vec<StoredNode>,
	by_name: HashMap<String, usize>,
	read_options: ReadOptions,
}

impl MemGroup {
	/// Create an empty group with default read limits.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty group with custom read limits.
	pub fn with_read_options(read_options: ReadOptions) -> Self {
		Self {
			read_options,
			..Self::default()
		}
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the group has no children.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Child names in creation order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.nodes.iter().map(|node| node.name.as_str())
	}

	/// Handles in creation order.
	pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + use<> {
		(0..self.nodes.len()).map(NodeHandle::new)
	}

	/// Compression applied to a child's payload.
	pub fn compression_of(&self, handle: NodeHandle) -> Result<Compression> {
		Ok(self.stored(handle)?.compression)
	}

	/// Raw stored form of a child.
	pub fn stored(&self, handle: NodeHandle) -> Result<&StoredNode> {
		self.nodes.get(handle.index()).ok_or(StoreError::InvalidHandle { index: handle.index() })
	}

	/// Insert an already-serialized node, as read from a store file.
	pub fn insert_stored(&mut self, node: StoredNode) -> Result<NodeHandle> {
		if self.by_name.contains_key(&node.name) {
			return Err(StoreError::NodeExists { name: node.name });
		}

		let index = self.nodes.len();
		self.by_name.insert(node.name.clone(), index);
		self.nodes.push(node);
		Ok(NodeHandle::new(index))
	}
}

impl Group for MemGroup {
	fn create_child(&mut self, name: &str, payload: Payload, attrs: Attributes, options: &StorageOptions) -> Result<NodeHandle> {
		if self.by_name.contains_key(name) {
			return Err(StoreError::NodeExists { name: name.to_owned() });
		}
		if payload.is_scalar() && options.compression.is_some() {
			return Err(StoreError::ScalarCompression { name: name.to_owned() });
		}

		let (compression, bytes) = encode_bytes(encode_payload(&payload), options.compression)?;
		debug!(name, shape = %payload.describe(), compression = compression.as_str(), "created node");

		self.insert_stored(StoredNode {
			name: name.to_owned(),
			attrs,
			compression,
			bytes,
		})
	}

	fn child(&self, name: &str) -> Option<NodeHandle> {
		self.by_name.get(name).copied().map(NodeHandle::new)
	}

	fn read(&self, handle: NodeHandle) -> Result<Node> {
		let stored = self.stored(handle)?;
		let raw = decode_bytes(stored.compression, &stored.bytes, self.read_options.max_decompressed_bytes)?;
		let payload = decode_payload(&raw)?;

		Ok(Node {
			name: stored.name.clone(),
			payload,
			attrs: stored.attrs.clone(),
		})
	}
}
