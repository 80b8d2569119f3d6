use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced while encoding, decoding, and persisting tagged nodes.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// No encoder is registered for the value kind.
	#[error("unsupported type: no encoder registered for {kind}")]
	UnsupportedType {
		/// Kind label of the rejected value.
		kind: &'static str,
	},
	/// Node `type` attribute names a tag with no registered decoder.
	#[error("unknown type tag {tag:?}")]
	UnknownTag {
		/// Tag as read from the node, lossily rendered.
		tag: String,
	},
	/// `python_subdtype` attribute is not in the numeric kind table.
	#[error("unknown python_subdtype {subtype:?}")]
	UnknownSubtype {
		/// Subtype as read from the node, lossily rendered.
		subtype: String,
	},
	/// Payload shape does not match what the tag requires.
	#[error("malformed payload for tag {tag:?}: {reason}")]
	MalformedPayload {
		/// Tag being decoded.
		tag: String,
		/// Short description of the mismatch.
		reason: String,
	},
	/// Node has no `type` attribute.
	#[error("node {node} has no type attribute")]
	MissingTypeAttr {
		/// Node name.
		node: String,
	},
	/// `python_dtype` node has no `python_subdtype` attribute.
	#[error("node {node} has no python_subdtype attribute")]
	MissingSubtypeAttr {
		/// Node name.
		node: String,
	},
	/// Container elements do not share one storable scalar class.
	#[error("heterogeneous container: first element is {first}, found {found}")]
	HeterogeneousContainer {
		/// Class of the first element.
		first: &'static str,
		/// Class of the offending element.
		found: &'static str,
	},
	/// Container element cannot live in a flat array payload.
	#[error("unsupported container element of kind {kind}")]
	UnsupportedElement {
		/// Kind label of the element.
		kind: &'static str,
	},
	/// Registry already has an encoder for this kind.
	#[error("duplicate encoder registration for {kind}")]
	DuplicateKind {
		/// Kind label.
		kind: &'static str,
	},
	/// Registry already has a decoder for this tag.
	#[error("duplicate decoder registration for tag {tag:?}")]
	DuplicateTag {
		/// Tag string.
		tag: String,
	},
	/// An encoder may emit a tag that no decoder handles.
	#[error("registry incomplete: tag {tag:?} is emitted but has no decoder")]
	IncompleteRegistry {
		/// Tag string with no decoder.
		tag: String,
	},
	/// Child name already exists in the group.
	#[error("node already exists: {name}")]
	NodeExists {
		/// Child name.
		name: String,
	},
	/// Child name does not exist in the group.
	#[error("node not found: {name}")]
	NodeNotFound {
		/// Child name.
		name: String,
	},
	/// Handle does not belong to this group.
	#[error("invalid node handle {index}")]
	InvalidHandle {
		/// Raw handle index.
		index: usize,
	},
	/// Compression was requested for a zero-dimensional payload.
	#[error("compression is not supported for scalar payload {name}")]
	ScalarCompression {
		/// Child name.
		name: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Store file does not start with the expected magic.
	#[error("invalid store header")]
	InvalidHeader,
	/// Unsupported store file format version.
	#[error("unsupported store format version {version} (expected {expected})")]
	UnsupportedFormatVersion {
		/// Parsed format version.
		version: u16,
		/// Version this build writes.
		expected: u16,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Record or encoded payload has an invalid marker.
	#[error("invalid record at offset {at}: {reason}")]
	InvalidRecord {
		/// Byte offset of the record or field.
		at: usize,
		/// Short description.
		reason: &'static str,
	},
	/// Stored text was not valid UTF-8.
	#[error("invalid utf-8 in {what}")]
	InvalidUtf8 {
		/// What was being read.
		what: &'static str,
	},
}
