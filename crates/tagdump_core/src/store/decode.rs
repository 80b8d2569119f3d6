use tracing::debug;

use crate::store::node::type_and_data;
use crate::store::tag::{node_name, render_tag};
use crate::store::{Array, Complex, Group, Node, NumericKind, Payload, Registry, Result, Scalar, StoreError, Value};

/// Load a node by dispatching on its `type` tag.
pub fn decode(registry: &Registry, node: &Node) -> Result<Value> {
	let (tag, _) = type_and_data(node)?;
	let load = registry.decoder_for(tag)?;
	debug!(node = %node.name, tag = %render_tag(tag), "decoding node");
	load(node)
}

/// Read `data_<position>` from `group` and decode it.
pub fn decode_child(registry: &Registry, group: &dyn Group, position: usize) -> Result<Value> {
	let name = node_name(position);
	let handle = group.child(&name).ok_or(StoreError::NodeNotFound { name })?;
	let node = group.read(handle)?;
	decode(registry, &node)
}

/// Load an ordered sequence in stored order.
pub fn load_list_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	Ok(Value::List(expect_array(tag, payload)?.to_values()))
}

/// Load a fixed sequence in stored order.
pub fn load_tuple_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	Ok(Value::Tuple(expect_array(tag, payload)?.to_values()))
}

/// Load an unordered unique collection; duplicate entries collapse.
pub fn load_set_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	Ok(Value::Set(expect_array(tag, payload)?.to_set()))
}

/// Load a byte string from a one-element byte array.
pub fn load_bytes_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	match expect_array(tag, payload)? {
		Array::Bytes(items) if items.len() == 1 => Ok(Value::Bytes(items[0].clone())),
		other => Err(malformed(tag, format!("expected bytes[1], got {}[{}]", other.class(), other.len()))),
	}
}

/// Load a text string from slot 0 of a one-element text array.
pub fn load_string_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	match expect_array(tag, payload)? {
		Array::Str(items) if items.len() == 1 => Ok(Value::Str(items[0].clone())),
		other => Err(malformed(tag, format!("expected vlen_str[1], got {}[{}]", other.class(), other.len()))),
	}
}

/// Load the absence-of-value singleton; payload contents are ignored.
pub fn load_none_dataset(_node: &Node) -> Result<Value> {
	Ok(Value::None)
}

/// Load a numeric scalar, selecting the constructor from `python_subdtype`.
pub fn load_python_dtype_dataset(node: &Node) -> Result<Value> {
	let (tag, payload) = type_and_data(node)?;
	let subtype = node.subtype_tag().ok_or_else(|| StoreError::MissingSubtypeAttr { node: node.name.clone() })?;
	let kind = NumericKind::from_tag(subtype).ok_or_else(|| StoreError::UnknownSubtype { subtype: render_tag(subtype) })?;

	let Payload::Scalar(scalar) = payload else {
		return Err(malformed(tag, format!("expected scalar, got {}", payload.describe())));
	};
	cast_scalar(kind, *scalar).ok_or_else(|| malformed(tag, format!("cannot read {} as {}", scalar.class(), kind.tag())))
}

/// Apply the numeric constructor for `kind` to a stored scalar.
///
/// Returns `None` where the language-level cast is undefined (complex to real, non-finite float to int).
pub fn cast_scalar(kind: NumericKind, scalar: Scalar) -> Option<Value> {
	Some(match (kind, scalar) {
		(NumericKind::Int, Scalar::Int(v)) => Value::Int(v),
		(NumericKind::Int, Scalar::Float(v)) => {
			// 2^63; `as` would saturate instead of failing.
			const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
			let truncated = v.trunc();
			if !truncated.is_finite() || truncated < -I64_BOUND || truncated >= I64_BOUND {
				return None;
			}
			Value::Int(truncated as i64)
		}
		(NumericKind::Int, Scalar::Bool(v)) => Value::Int(i64::from(v)),
		(NumericKind::Float, Scalar::Int(v)) => Value::Float(v as f64),
		(NumericKind::Float, Scalar::Float(v)) => Value::Float(v),
		(NumericKind::Float, Scalar::Bool(v)) => Value::Float(if v { 1.0 } else { 0.0 }),
		(NumericKind::Bool, Scalar::Int(v)) => Value::Bool(v != 0),
		(NumericKind::Bool, Scalar::Float(v)) => Value::Bool(v != 0.0),
		(NumericKind::Bool, Scalar::Bool(v)) => Value::Bool(v),
		(NumericKind::Bool, Scalar::Complex(v)) => Value::Bool(v.re != 0.0 || v.im != 0.0),
		(NumericKind::Complex, Scalar::Int(v)) => Value::Complex(Complex::new(v as f64, 0.0)),
		(NumericKind::Complex, Scalar::Float(v)) => Value::Complex(Complex::new(v, 0.0)),
		(NumericKind::Complex, Scalar::Bool(v)) => Value::Complex(Complex::new(if v { 1.0 } else { 0.0 }, 0.0)),
		(NumericKind::Complex, Scalar::Complex(v)) => Value::Complex(v),
		(NumericKind::Int | NumericKind::Float, Scalar::Complex(_)) => return None,
	})
}

fn expect_array<'a>(tag: &[u8], payload: &'a Payload) -> Result<&'a Array> {
	match payload {
		Payload::Array(array) => Ok(array),
		Payload::Scalar(scalar) => Err(malformed(tag, format!("expected array, got scalar {}", scalar.class()))),
	}
}

fn malformed(tag: &[u8], reason: String) -> StoreError {
	StoreError::MalformedPayload { tag: render_tag(tag), reason }
}
