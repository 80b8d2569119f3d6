use tracing::debug;

use crate::store::tag::{SUBTYPE_ATTR, TAG_BYTES, TAG_NONE, TAG_PYTHON_DTYPE, TAG_STRING, TYPE_ATTR, node_name, structural_tag};
use crate::store::{Array, AttrValue, Attributes, Group, Kind, NodeHandle, NumericKind, Payload, Registry, Result, Scalar, StorageOptions, StoreError, Value};

/// Dump `value` into `group` at `data_<position>` using the encoder registered for its kind.
pub fn encode(registry: &Registry, value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
	let kind = value.kind();
	let entry = registry.encoder_for(kind)?;
	debug!(kind = kind.as_str(), position, "encoding value");
	(entry.convert)(value, group, position, options)
}

/// Encoder shared by list, tuple, and set: a flat array tagged with the concrete kind.
pub fn create_listlike_dataset(value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
	let kind = value.kind();
	let array = match value {
		Value::List(items) | Value::Tuple(items) => flatten(items.iter())?,
		Value::Set(items) => flatten(items.iter())?,
		_ => return Err(StoreError::UnsupportedType { kind: kind.as_str() }),
	};
	let tag = structural_tag(kind).ok_or(StoreError::UnsupportedType { kind: kind.as_str() })?;

	group.create_child(&node_name(position), Payload::Array(array), type_attrs(tag), options)
}

/// Encoder for byte strings and text strings.
pub fn create_stringlike_dataset(value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
	let (array, tag) = match value {
		Value::Bytes(bytes) => (Array::Bytes(vec![bytes.clone()]), TAG_BYTES),
		Value::Str(text) => (Array::Str(vec![text.clone()]), TAG_STRING),
		other => return Err(StoreError::UnsupportedType { kind: other.kind().as_str() }),
	};

	group.create_child(&node_name(position), Payload::Array(array), type_attrs(tag), options)
}

/// Encoder for int, float, bool, and complex scalars.
///
/// Scalars are zero-dimensional and cannot be compressed, so caller options are dropped here.
pub fn create_python_dtype_dataset(value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
	let scalar = match value {
		Value::Int(v) => Scalar::Int(*v),
		Value::Float(v) => Scalar::Float(*v),
		Value::Bool(v) => Scalar::Bool(*v),
		Value::Complex(v) => Scalar::Complex(*v),
		other => return Err(StoreError::UnsupportedType { kind: other.kind().as_str() }),
	};
	let subtype = NumericKind::for_kind(value.kind()).ok_or(StoreError::UnsupportedType { kind: value.kind().as_str() })?;

	let mut attrs = type_attrs(TAG_PYTHON_DTYPE);
	attrs.insert(SUBTYPE_ATTR.to_owned(), AttrValue::tag(subtype.tag()));

	let options = scalar_options(options, position);
	group.create_child(&node_name(position), Payload::Scalar(scalar), attrs, &options)
}

/// Encoder for the absence-of-value singleton: a one-element zero placeholder.
pub fn create_none_dataset(value: &Value, group: &mut dyn Group, position: usize, options: &StorageOptions) -> Result<NodeHandle> {
	if !matches!(value, Value::None) {
		return Err(StoreError::UnsupportedType { kind: value.kind().as_str() });
	}

	let options = scalar_options(options, position);
	group.create_child(&node_name(position), Payload::Array(Array::Int(vec![0])), type_attrs(TAG_NONE), &options)
}

fn scalar_options(options: &StorageOptions, position: usize) -> StorageOptions {
	if options.compression.is_some() {
		debug!(position, "dropping storage options for scalar payload");
	}
	StorageOptions::default()
}

fn type_attrs(tag: &str) -> Attributes {
	let mut attrs = Attributes::new();
	attrs.insert(TYPE_ATTR.to_owned(), AttrValue::tag_list(tag));
	attrs
}

/// Storage class a container element maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementClass {
	Int,
	Float,
	Bool,
	Complex,
	Bytes,
	Str,
}

impl ElementClass {
	fn of(value: &Value) -> Result<Self> {
		Ok(match value {
			Value::Int(_) => Self::Int,
			Value::Float(_) => Self::Float,
			Value::Bool(_) => Self::Bool,
			Value::Complex(_) => Self::Complex,
			Value::Bytes(_) => Self::Bytes,
			Value::Str(_) => Self::Str,
			other => return Err(StoreError::UnsupportedElement { kind: other.kind().as_str() }),
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Int => Kind::Int.as_str(),
			Self::Float => Kind::Float.as_str(),
			Self::Bool => Kind::Bool.as_str(),
			Self::Complex => Kind::Complex.as_str(),
			Self::Bytes => Kind::Bytes.as_str(),
			Self::Str => Kind::Str.as_str(),
		}
	}

	/// Class holding both `self` and `other`. Classes never widen, so int and float do not mix.
	fn unify(self, other: Self) -> Option<Self> {
		(self == other).then_some(self)
	}
}

/// Materialize container elements as one homogeneous array, preserving order.
fn flatten<'a>(items: impl Iterator<Item = &'a Value> + Clone) -> Result<Array> {
	let mut class: Option<ElementClass> = None;
	for item in items.clone() {
		let found = ElementClass::of(item)?;
		class = Some(match class {
			None => found,
			Some(current) => current.unify(found).ok_or(StoreError::HeterogeneousContainer {
				first: current.as_str(),
				found: found.as_str(),
			})?,
		});
	}

	// Empty containers store an empty float array.
	let Some(class) = class else {
		return Ok(Array::Float(Vec::new()));
	};

	Ok(match class {
		ElementClass::Int => Array::Int(items.filter_map(|v| if let Value::Int(x) = v { Some(*x) } else { None }).collect()),
		ElementClass::Float => Array::Float(items.filter_map(|v| if let Value::Float(x) = v { Some(*x) } else { None }).collect()),
		ElementClass::Bool => Array::Bool(items.filter_map(|v| if let Value::Bool(x) = v { Some(*x) } else { None }).collect()),
		ElementClass::Complex => Array::Complex(items.filter_map(|v| if let Value::Complex(x) = v { Some(*x) } else { None }).collect()),
		ElementClass::Bytes => Array::Bytes(items.filter_map(|v| if let Value::Bytes(x) = v { Some(x.clone()) } else { None }).collect()),
		ElementClass::Str => Array::Str(items.filter_map(|v| if let Value::Str(x) = v { Some(x.clone()) } else { None }).collect()),
	})
}

#[cfg(test)]
mod tests;
