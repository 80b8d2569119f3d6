use crate::store::Kind;

/// Attribute holding the encoding variant tag.
pub const TYPE_ATTR: &str = "type";
/// Attribute holding the numeric kind of a `python_dtype` node.
pub const SUBTYPE_ATTR: &str = "python_subdtype";

/// Structural tag for ordered sequences.
pub const TAG_LIST: &str = "<class 'list'>";
/// Structural tag for fixed sequences.
pub const TAG_TUPLE: &str = "<class 'tuple'>";
/// Structural tag for unordered unique collections.
pub const TAG_SET: &str = "<class 'set'>";
/// Short decode-only alias of [`TAG_LIST`].
pub const ALIAS_LIST: &str = "list";
/// Short decode-only alias of [`TAG_TUPLE`].
pub const ALIAS_TUPLE: &str = "tuple";
/// Short decode-only alias of [`TAG_SET`].
pub const ALIAS_SET: &str = "set";

/// Leaf tag for byte strings.
pub const TAG_BYTES: &str = "bytes";
/// Leaf tag for text strings.
pub const TAG_STRING: &str = "string";
/// Leaf tag for the absence-of-value placeholder.
pub const TAG_NONE: &str = "none";
/// Leaf tag for zero-dimensional numeric scalars.
pub const TAG_PYTHON_DTYPE: &str = "python_dtype";

/// Structural tag written for a container kind.
pub fn structural_tag(kind: Kind) -> Option<&'static str> {
	match kind {
		Kind::List => Some(TAG_LIST),
		Kind::Tuple => Some(TAG_TUPLE),
		Kind::Set => Some(TAG_SET),
		_ => None,
	}
}

/// Numeric kind named by a `python_subdtype` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
	/// `<class 'int'>`
	Int,
	/// `<class 'float'>`
	Float,
	/// `<class 'bool'>`
	Bool,
	/// `<class 'complex'>`
	Complex,
}

impl NumericKind {
	/// Every numeric kind in the subtype table.
	pub const ALL: [NumericKind; 4] = [Self::Int, Self::Float, Self::Bool, Self::Complex];

	/// Subtype tag string.
	pub fn tag(self) -> &'static str {
		match self {
			Self::Int => "<class 'int'>",
			Self::Float => "<class 'float'>",
			Self::Bool => "<class 'bool'>",
			Self::Complex => "<class 'complex'>",
		}
	}

	/// Look up a subtype tag; exact match only.
	pub fn from_tag(tag: &[u8]) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag().as_bytes() == tag)
	}

	/// Numeric kind for a scalar value kind.
	pub fn for_kind(kind: Kind) -> Option<Self> {
		match kind {
			Kind::Int => Some(Self::Int),
			Kind::Float => Some(Self::Float),
			Kind::Bool => Some(Self::Bool),
			Kind::Complex => Some(Self::Complex),
			_ => None,
		}
	}
}

/// Child name for a positional index within a group.
pub fn node_name(position: usize) -> String {
	format!("data_{position}")
}

/// Render raw tag bytes for messages.
pub fn render_tag(tag: &[u8]) -> String {
	String::from_utf8_lossy(tag).into_owned()
}

#[cfg(test)]
mod tests {
	use super::{NumericKind, node_name, structural_tag};
	use crate::store::Kind;

	#[test]
	fn subtype_lookup_is_exact() {
		assert_eq!(NumericKind::from_tag(b"<class 'bool'>"), Some(NumericKind::Bool));
		assert_eq!(NumericKind::from_tag(b"bool"), None);
		assert_eq!(NumericKind::from_tag(b"<class 'bool'> "), None);
	}

	#[test]
	fn structural_tags_are_distinct_per_container() {
		let tags: Vec<_> = [Kind::List, Kind::Tuple, Kind::Set].into_iter().filter_map(structural_tag).collect();
		assert_eq!(tags, ["<class 'list'>", "<class 'tuple'>", "<class 'set'>"]);
		assert_eq!(structural_tag(Kind::Bytes), None);
	}

	#[test]
	fn node_names_are_positional() {
		assert_eq!(node_name(0), "data_0");
		assert_eq!(node_name(12), "data_12");
	}
}
