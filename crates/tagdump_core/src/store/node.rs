use crate::store::tag::{SUBTYPE_ATTR, TYPE_ATTR};
use crate::store::{AttrValue, Attributes, Payload, Result, StorageOptions, StoreError};

/// Opaque handle to a node created in or resolved from a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
	/// Wrap a group-local index.
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Group-local index.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Node as read back from a group: payload plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	/// Child name within the parent group.
	pub name: String,
	/// Stored payload.
	pub payload: Payload,
	/// Stored attributes.
	pub attrs: Attributes,
}

impl Node {
	/// Look up an attribute by name.
	pub fn attr(&self, name: &str) -> Option<&AttrValue> {
		self.attrs.get(name)
	}

	/// Raw `type` tag, if present.
	pub fn type_tag(&self) -> Option<&[u8]> {
		self.attr(TYPE_ATTR).and_then(AttrValue::first_bytes)
	}

	/// Raw `python_subdtype` tag, if present.
	pub fn subtype_tag(&self) -> Option<&[u8]> {
		self.attr(SUBTYPE_ATTR).and_then(AttrValue::first_bytes)
	}
}

/// Return the node's `type` tag together with its payload.
pub fn type_and_data(node: &Node) -> Result<(&[u8], &Payload)> {
	let tag = node.type_tag().ok_or_else(|| StoreError::MissingTypeAttr { node: node.name.clone() })?;
	Ok((tag, &node.payload))
}

/// Hierarchical container that dispatch writes nodes into and reads them from.
pub trait Group {
	/// Create a new child node. Fails if `name` already exists.
	fn create_child(&mut self, name: &str, payload: Payload, attrs: Attributes, options: &StorageOptions) -> Result<NodeHandle>;

	/// Resolve a child by name.
	fn child(&self, name: &str) -> Option<NodeHandle>;

	/// Read a child's payload and attributes.
	fn read(&self, handle: NodeHandle) -> Result<Node>;
}
