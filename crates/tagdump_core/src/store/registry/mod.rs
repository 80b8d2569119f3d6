use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::debug;

use crate::store::decode::{
	load_bytes_dataset, load_list_dataset, load_none_dataset, load_python_dtype_dataset, load_set_dataset, load_string_dataset, load_tuple_dataset,
};
use crate::store::encode::{create_listlike_dataset, create_none_dataset, create_python_dtype_dataset, create_stringlike_dataset};
use crate::store::tag::{
	ALIAS_LIST, ALIAS_SET, ALIAS_TUPLE, TAG_BYTES, TAG_LIST, TAG_NONE, TAG_PYTHON_DTYPE, TAG_SET, TAG_STRING, TAG_TUPLE, render_tag,
};
use crate::store::{Group, Kind, Node, NodeHandle, Result, StorageOptions, StoreError, Value};

/// Converter writing one value as one node at `data_<position>`.
pub type EncodeFn = fn(&Value, &mut dyn Group, usize, &StorageOptions) -> Result<NodeHandle>;

/// Inverse converter rebuilding a value from a node.
pub type DecodeFn = fn(&Node) -> Result<Value>;

/// Encoder registered for one kind, with the `type` tags it may write.
#[derive(Debug, Clone, Copy)]
pub struct EncoderEntry {
	/// Converter function.
	pub convert: EncodeFn,
	/// Every `type` tag this converter can emit.
	pub emits: &'static [&'static str],
}

const LIST_TAGS: &[&str] = &[TAG_LIST];
const TUPLE_TAGS: &[&str] = &[TAG_TUPLE];
const SET_TAGS: &[&str] = &[TAG_SET];
const BYTES_TAGS: &[&str] = &[TAG_BYTES];
const STRING_TAGS: &[&str] = &[TAG_STRING];
const DTYPE_TAGS: &[&str] = &[TAG_PYTHON_DTYPE];
const NONE_TAGS: &[&str] = &[TAG_NONE];

fn builtin_encoders() -> [(Kind, EncoderEntry); 10] {
	let entry = |convert: EncodeFn, emits: &'static [&'static str]| EncoderEntry { convert, emits };
	[
		(Kind::List, entry(create_listlike_dataset, LIST_TAGS)),
		(Kind::Tuple, entry(create_listlike_dataset, TUPLE_TAGS)),
		(Kind::Set, entry(create_listlike_dataset, SET_TAGS)),
		(Kind::Bytes, entry(create_stringlike_dataset, BYTES_TAGS)),
		(Kind::Str, entry(create_stringlike_dataset, STRING_TAGS)),
		(Kind::Int, entry(create_python_dtype_dataset, DTYPE_TAGS)),
		(Kind::Float, entry(create_python_dtype_dataset, DTYPE_TAGS)),
		(Kind::Bool, entry(create_python_dtype_dataset, DTYPE_TAGS)),
		(Kind::Complex, entry(create_python_dtype_dataset, DTYPE_TAGS)),
		(Kind::None, entry(create_none_dataset, NONE_TAGS)),
	]
}

fn builtin_decoders() -> [(&'static str, DecodeFn); 10] {
	[
		(TAG_LIST, load_list_dataset),
		(TAG_TUPLE, load_tuple_dataset),
		(TAG_SET, load_set_dataset),
		(ALIAS_LIST, load_list_dataset),
		(ALIAS_TUPLE, load_tuple_dataset),
		(ALIAS_SET, load_set_dataset),
		(TAG_BYTES, load_bytes_dataset),
		(TAG_STRING, load_string_dataset),
		(TAG_NONE, load_none_dataset),
		(TAG_PYTHON_DTYPE, load_python_dtype_dataset),
	]
}

/// Immutable bidirectional mapping consulted by encode and decode dispatch.
#[derive(Debug, Clone)]
pub struct Registry {
	encoders: HashMap<Kind, EncoderEntry>,
	decoders: HashMap<Vec<u8>, DecodeFn>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
	/// Registry holding exactly the built-in pairs.
	pub fn builtin() -> Self {
		Self {
			encoders: builtin_encoders().into_iter().collect(),
			decoders: builtin_decoders().into_iter().map(|(tag, load)| (tag.as_bytes().to_vec(), load)).collect(),
		}
	}

	/// Process-wide built-in registry, created on first use and never mutated.
	pub fn global() -> &'static Self {
		GLOBAL.get_or_init(|| {
			debug!("initializing global tag registry");
			Self::builtin()
		})
	}

	/// Start an empty builder.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Encoder registered for `kind`.
	pub fn encoder_for(&self, kind: Kind) -> Result<&EncoderEntry> {
		self.encoders.get(&kind).ok_or(StoreError::UnsupportedType { kind: kind.as_str() })
	}

	/// Decoder registered for `tag`; exact match only.
	pub fn decoder_for(&self, tag: &[u8]) -> Result<DecodeFn> {
		self.decoders.get(tag).copied().ok_or_else(|| StoreError::UnknownTag { tag: render_tag(tag) })
	}

	/// Kinds with a registered encoder.
	pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
		self.encoders.keys().copied()
	}

	/// Tags with a registered decoder.
	pub fn tags(&self) -> impl Iterator<Item = &[u8]> {
		self.decoders.keys().map(Vec::as_slice)
	}

	/// Every tag some registered encoder may write.
	pub fn emitted_tags(&self) -> HashSet<&'static str> {
		self.encoders.values().flat_map(|entry| entry.emits.iter().copied()).collect()
	}

	/// Dump `value` into `group` at `data_<position>`.
	pub fn encode(&self, value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
		crate::store::encode::encode(self, value, group, position, options)
	}

	/// Load a value from `node`.
	pub fn decode(&self, node: &Node) -> Result<Value> {
		crate::store::decode::decode(self, node)
	}

	/// Load the value stored at `data_<position>` in `group`.
	pub fn decode_child(&self, group: &dyn Group, position: usize) -> Result<Value> {
		crate::store::decode::decode_child(self, group, position)
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::builtin()
	}
}

/// Startup-time registration of (kind → encoder) and (tag → decoder) pairs.
///
/// Registrations never override; [`RegistryBuilder::build`] rejects a registry
/// where an encoder can write a tag that no decoder reads.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	encoders: HashMap<Kind, EncoderEntry>,
	decoders: HashMap<Vec<u8>, DecodeFn>,
}

impl RegistryBuilder {
	/// Empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder pre-populated with the built-in pairs.
	pub fn with_builtins() -> Self {
		let Registry { encoders, decoders } = Registry::builtin();
		Self { encoders, decoders }
	}

	/// Register the encoder for `kind`.
	pub fn encoder(mut self, kind: Kind, emits: &'static [&'static str], convert: EncodeFn) -> Result<Self> {
		if self.encoders.contains_key(&kind) {
			return Err(StoreError::DuplicateKind { kind: kind.as_str() });
		}
		self.encoders.insert(kind, EncoderEntry { convert, emits });
		Ok(self)
	}

	/// Register the decoder for `tag`.
	pub fn decoder(mut self, tag: &str, load: DecodeFn) -> Result<Self> {
		let key = tag.as_bytes().to_vec();
		if self.decoders.contains_key(&key) {
			return Err(StoreError::DuplicateTag { tag: tag.to_owned() });
		}
		self.decoders.insert(key, load);
		Ok(self)
	}

	/// Validate tag completeness and freeze the registry.
	pub fn build(self) -> Result<Registry> {
		let mut emitted: Vec<&'static str> = self.encoders.values().flat_map(|entry| entry.emits.iter().copied()).collect();
		emitted.sort_unstable();
		if let Some(tag) = emitted.into_iter().find(|tag| !self.decoders.contains_key(tag.as_bytes())) {
			return Err(StoreError::IncompleteRegistry { tag: tag.to_owned() });
		}

		Ok(Registry {
			encoders: self.encoders,
			decoders: self.decoders,
		})
	}
}
