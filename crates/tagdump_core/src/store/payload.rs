use std::collections::BTreeMap;

use crate::store::{Complex, Value, ValueSet};

/// Zero-dimensional numeric payload in the value's own storage width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
	/// 64-bit signed integer.
	Int(i64),
	/// 64-bit float.
	Float(f64),
	/// One-byte boolean.
	Bool(bool),
	/// Pair of 64-bit floats.
	Complex(Complex),
}

impl Scalar {
	/// Storage class label.
	pub fn class(self) -> &'static str {
		match self {
			Self::Int(_) => "int64",
			Self::Float(_) => "float64",
			Self::Bool(_) => "bool",
			Self::Complex(_) => "complex128",
		}
	}
}

/// One-dimensional homogeneous payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
	/// 64-bit signed integers.
	Int(Vec<i64>),
	/// 64-bit floats.
	Float(Vec<f64>),
	/// Booleans.
	Bool(Vec<bool>),
	/// Complex numbers.
	Complex(Vec<Complex>),
	/// Fixed-width byte strings.
	Bytes(Vec<Vec<u8>>),
	/// Variable-length text.
	Str(Vec<String>),
}

impl Array {
	/// Number of elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Int(items) => items.len(),
			Self::Float(items) => items.len(),
			Self::Bool(items) => items.len(),
			Self::Complex(items) => items.len(),
			Self::Bytes(items) => items.len(),
			Self::Str(items) => items.len(),
		}
	}

	/// Whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Storage class label.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Int(_) => "int64",
			Self::Float(_) => "float64",
			Self::Bool(_) => "bool",
			Self::Complex(_) => "complex128",
			Self::Bytes(_) => "bytes",
			Self::Str(_) => "vlen_str",
		}
	}

	/// Convert each element into its leaf [`Value`], in stored order.
	pub fn to_values(&self) -> Vec<Value> {
		match self {
			Self::Int(items) => items.iter().copied().map(Value::Int).collect(),
			Self::Float(items) => items.iter().copied().map(Value::Float).collect(),
			Self::Bool(items) => items.iter().copied().map(Value::Bool).collect(),
			Self::Complex(items) => items.iter().copied().map(Value::Complex).collect(),
			Self::Bytes(items) => items.iter().cloned().map(Value::Bytes).collect(),
			Self::Str(items) => items.iter().cloned().map(Value::Str).collect(),
		}
	}

	/// Collect elements into a set; duplicates collapse.
	pub fn to_set(&self) -> ValueSet {
		self.to_values().into_iter().collect()
	}
}

/// Node payload: either a fixed-shape array or a zero-dimensional scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	/// Zero-dimensional scalar; never compressed.
	Scalar(Scalar),
	/// One-dimensional array.
	Array(Array),
}

impl Payload {
	/// Whether this is a zero-dimensional payload.
	pub fn is_scalar(&self) -> bool {
		matches!(self, Self::Scalar(_))
	}

	/// Short shape description, e.g. `scalar int64` or `float64[3]`.
	pub fn describe(&self) -> String {
		match self {
			Self::Scalar(value) => format!("scalar {}", value.class()),
			Self::Array(array) => format!("{}[{}]", array.class(), array.len()),
		}
	}
}

/// Attribute value as modeled by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Single byte string.
	Bytes(Vec<u8>),
	/// Sequence of byte strings.
	BytesList(Vec<Vec<u8>>),
}

impl AttrValue {
	/// Length-1 list holding `tag`, the shape used for `type`.
	pub fn tag_list(tag: &str) -> Self {
		Self::BytesList(vec![tag.as_bytes().to_vec()])
	}

	/// Plain byte string holding `tag`.
	pub fn tag(tag: &str) -> Self {
		Self::Bytes(tag.as_bytes().to_vec())
	}

	/// Bytes of a plain value or the first element of a list.
	pub fn first_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(bytes) => Some(bytes),
			Self::BytesList(items) => items.first().map(Vec::as_slice),
		}
	}
}

/// Node attributes keyed by name.
pub type Attributes = BTreeMap<String, AttrValue>;
