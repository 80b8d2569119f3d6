mod bytes;
mod compression;
mod decode;
mod encode;
mod error;
mod file;
mod header;
mod mem;
mod node;
mod options;
mod payload;
mod record;
mod registry;
mod tag;
mod value;
mod wire;

/// Payload compression mode.
pub use compression::Compression;
/// Decoder dispatch and built-in inverse converters.
pub use decode::{
	cast_scalar, decode, decode_child, load_bytes_dataset, load_list_dataset, load_none_dataset, load_python_dtype_dataset, load_set_dataset,
	load_string_dataset, load_tuple_dataset,
};
/// Encoder dispatch and built-in converters.
pub use encode::{create_listlike_dataset, create_none_dataset, create_python_dtype_dataset, create_stringlike_dataset, encode};
/// Error and result aliases.
pub use error::{Result, StoreError};
/// Persisted single-file store.
pub use file::StoreFile;
/// Store file header.
pub use header::StoreHeader;
/// In-memory reference group.
pub use mem::{MemGroup, StoredNode};
/// Store boundary types and the shared node-read helper.
pub use node::{Group, Node, NodeHandle, type_and_data};
/// Per-call storage and read options.
pub use options::{ReadOptions, StorageOptions};
/// Payload and attribute model.
pub use payload::{Array, AttrValue, Attributes, Payload, Scalar};
/// Type tag registry.
pub use registry::{DecodeFn, EncodeFn, EncoderEntry, Registry, RegistryBuilder};
/// Tag vocabulary.
pub use tag::{
	ALIAS_LIST, ALIAS_SET, ALIAS_TUPLE, NumericKind, SUBTYPE_ATTR, TAG_BYTES, TAG_LIST, TAG_NONE, TAG_PYTHON_DTYPE, TAG_SET, TAG_STRING, TAG_TUPLE,
	TYPE_ATTR, node_name, structural_tag,
};
/// In-memory value types.
pub use value::{Complex, Kind, Value, ValueSet};
