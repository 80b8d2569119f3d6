use serde::{Deserialize, Serialize};

/// Complex number stored as two double-precision components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
	/// Real part.
	pub re: f64,
	/// Imaginary part.
	pub im: f64,
}

impl Complex {
	/// Build a complex number from its parts.
	pub fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}
}

/// In-memory value that can be dumped to and loaded from a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
	/// Ordered sequence.
	List(Vec<Value>),
	/// Fixed sequence.
	Tuple(Vec<Value>),
	/// Unordered unique collection.
	Set(ValueSet),
	/// Byte string.
	Bytes(Vec<u8>),
	/// Text string.
	Str(String),
	/// Signed integer.
	Int(i64),
	/// Floating-point number.
	Float(f64),
	/// Boolean.
	Bool(bool),
	/// Complex number.
	Complex(Complex),
	/// Absence of value.
	None,
}

impl Value {
	/// Runtime kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Self::List(_) => Kind::List,
			Self::Tuple(_) => Kind::Tuple,
			Self::Set(_) => Kind::Set,
			Self::Bytes(_) => Kind::Bytes,
			Self::Str(_) => Kind::Str,
			Self::Int(_) => Kind::Int,
			Self::Float(_) => Kind::Float,
			Self::Bool(_) => Kind::Bool,
			Self::Complex(_) => Kind::Complex,
			Self::None => Kind::None,
		}
	}

	/// Build a byte-string value.
	pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
		Self::Bytes(data.into())
	}

	/// Build a set value, collapsing duplicates.
	pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
		Self::Set(items.into_iter().collect())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Complex> for Value {
	fn from(value: Complex) -> Self {
		Self::Complex(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

/// Runtime category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Ordered sequence.
	List,
	/// Fixed sequence.
	Tuple,
	/// Unordered unique collection.
	Set,
	/// Byte string.
	Bytes,
	/// Text string.
	Str,
	/// Signed 64-bit integer.
	Int,
	/// Double-precision float.
	Float,
	/// Boolean.
	Bool,
	/// Complex number.
	Complex,
	/// Absence of value.
	None,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 10] = [
		Self::List,
		Self::Tuple,
		Self::Set,
		Self::Bytes,
		Self::Str,
		Self::Int,
		Self::Float,
		Self::Bool,
		Self::Complex,
		Self::None,
	];

	/// Runtime type name recorded in tags and diagnostics.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::List => "list",
			Self::Tuple => "tuple",
			Self::Set => "set",
			Self::Bytes => "bytes",
			Self::Str => "str",
			Self::Int => "int",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::Complex => "complex",
			Self::None => "NoneType",
		}
	}
}

/// Insertion-ordered collection of unique values.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct ValueSet {
	items: Vec<Value>,
}

impl ValueSet {
	/// Create an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert `value`, returning `false` if an equal value was already present.
	pub fn insert(&mut self, value: Value) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.items.push(value);
		true
	}

	/// Whether an equal value is present.
	pub fn contains(&self, value: &Value) -> bool {
		self.items.iter().any(|item| item == value)
	}

	/// Number of unique values.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the set has no values.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterate values in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}
}

impl PartialEq for ValueSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|item| other.contains(item))
	}
}

impl FromIterator<Value> for ValueSet {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		let mut set = Self::new();
		for value in iter {
			set.insert(value);
		}
		set
	}
}

impl From<Vec<Value>> for ValueSet {
	fn from(items: Vec<Value>) -> Self {
		items.into_iter().collect()
	}
}

impl From<ValueSet> for Vec<Value> {
	fn from(set: ValueSet) -> Self {
		set.items
	}
}

impl<'a> IntoIterator for &'a ValueSet {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
