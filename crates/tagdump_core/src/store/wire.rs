//! Byte layout of a payload inside a stored node.
//!
//! `shape:u8` (`0` scalar, `1` array), `class:u8`, then for arrays a `u64`
//! element count followed by the elements. Fixed-width classes are stored
//! little-endian; byte strings and text carry a `u64` length prefix each.

use tracing::trace;

use crate::store::bytes::{Cursor, Writer};
use crate::store::{Array, Complex, Payload, Result, Scalar, StoreError};

const SHAPE_SCALAR: u8 = 0;
const SHAPE_ARRAY: u8 = 1;

const CLASS_INT: u8 = 1;
const CLASS_FLOAT: u8 = 2;
const CLASS_BOOL: u8 = 3;
const CLASS_COMPLEX: u8 = 4;
const CLASS_BYTES: u8 = 5;
const CLASS_STR: u8 = 6;

/// Serialize a payload.
pub fn encode_payload(payload: &Payload) -> Vec<u8> {
	let mut out = Writer::new();
	match payload {
		Payload::Scalar(value) => {
			out.put_u8(SHAPE_SCALAR);
			put_scalar(&mut out, *value);
		}
		Payload::Array(array) => {
			out.put_u8(SHAPE_ARRAY);
			put_array(&mut out, array);
		}
	}
	let bytes = out.into_inner();
	trace!(shape = %payload.describe(), len = bytes.len(), "encoded payload");
	bytes
}

/// Parse a payload produced by [`encode_payload`].
pub fn decode_payload(bytes: &[u8]) -> Result<Payload> {
	let mut cursor = Cursor::new(bytes);
	let payload = match cursor.read_u8()? {
		SHAPE_SCALAR => Payload::Scalar(read_scalar(&mut cursor)?),
		SHAPE_ARRAY => Payload::Array(read_array(&mut cursor)?),
		_ => {
			return Err(StoreError::InvalidRecord {
				at: 0,
				reason: "unknown payload shape",
			});
		}
	};

	if cursor.remaining() > 0 {
		return Err(StoreError::InvalidRecord {
			at: cursor.pos(),
			reason: "trailing bytes after payload",
		});
	}
	Ok(payload)
}

fn put_scalar(out: &mut Writer, value: Scalar) {
	match value {
		Scalar::Int(v) => {
			out.put_u8(CLASS_INT);
			out.put_i64_le(v);
		}
		Scalar::Float(v) => {
			out.put_u8(CLASS_FLOAT);
			out.put_f64_le(v);
		}
		Scalar::Bool(v) => {
			out.put_u8(CLASS_BOOL);
			out.put_u8(u8::from(v));
		}
		Scalar::Complex(v) => {
			out.put_u8(CLASS_COMPLEX);
			put_complex(out, v);
		}
	}
}

fn put_array(out: &mut Writer, array: &Array) {
	let class = match array {
		Array::Int(_) => CLASS_INT,
		Array::Float(_) => CLASS_FLOAT,
		Array::Bool(_) => CLASS_BOOL,
		Array::Complex(_) => CLASS_COMPLEX,
		Array::Bytes(_) => CLASS_BYTES,
		Array::Str(_) => CLASS_STR,
	};
	out.put_u8(class);
	out.put_u64_le(array.len() as u64);

	match array {
		Array::Int(items) => items.iter().for_each(|v| out.put_i64_le(*v)),
		Array::Float(items) => items.iter().for_each(|v| out.put_f64_le(*v)),
		Array::Bool(items) => items.iter().for_each(|v| out.put_u8(u8::from(*v))),
		Array::Complex(items) => items.iter().for_each(|v| put_complex(out, *v)),
		Array::Bytes(items) => items.iter().for_each(|v| out.put_blob(v)),
		Array::Str(items) => items.iter().for_each(|v| out.put_blob(v.as_bytes())),
	}
}

fn put_complex(out: &mut Writer, value: Complex) {
	out.put_f64_le(value.re);
	out.put_f64_le(value.im);
}

fn read_scalar(cursor: &mut Cursor<'_>) -> Result<Scalar> {
	let at = cursor.pos();
	Ok(match cursor.read_u8()? {
		CLASS_INT => Scalar::Int(cursor.read_i64_le()?),
		CLASS_FLOAT => Scalar::Float(cursor.read_f64_le()?),
		CLASS_BOOL => Scalar::Bool(read_bool(cursor)?),
		CLASS_COMPLEX => Scalar::Complex(read_complex(cursor)?),
		_ => {
			return Err(StoreError::InvalidRecord {
				at,
				reason: "unknown scalar class",
			});
		}
	})
}

fn read_array(cursor: &mut Cursor<'_>) -> Result<Array> {
	let at = cursor.pos();
	let class = cursor.read_u8()?;
	let width = min_wire_width(class).ok_or(StoreError::InvalidRecord {
		at,
		reason: "unknown array class",
	})?;
	let count = cursor.read_len_u64()?;
	// Bounds the element allocation by the bytes actually present.
	let need = count.saturating_mul(width);
	if need > cursor.remaining() {
		return Err(StoreError::UnexpectedEof {
			at: cursor.pos(),
			need,
			rem: cursor.remaining(),
		});
	}

	Ok(match class {
		CLASS_INT => Array::Int(read_n(cursor, count, |c| c.read_i64_le())?),
		CLASS_FLOAT => Array::Float(read_n(cursor, count, |c| c.read_f64_le())?),
		CLASS_BOOL => Array::Bool(read_n(cursor, count, read_bool)?),
		CLASS_COMPLEX => Array::Complex(read_n(cursor, count, read_complex)?),
		CLASS_BYTES => Array::Bytes(read_n(cursor, count, |c| Ok(c.read_blob()?.to_vec()))?),
		CLASS_STR => Array::Str(read_n(cursor, count, |c| {
			let raw = c.read_blob()?;
			String::from_utf8(raw.to_vec()).map_err(|_| StoreError::InvalidUtf8 { what: "text payload" })
		})?),
		_ => {
			return Err(StoreError::InvalidRecord {
				at,
				reason: "unknown array class",
			});
		}
	})
}

/// Smallest number of payload bytes one element of `class` occupies.
fn min_wire_width(class: u8) -> Option<usize> {
	match class {
		CLASS_INT | CLASS_FLOAT => Some(8),
		CLASS_BOOL => Some(1),
		CLASS_COMPLEX => Some(16),
		// Length prefix only.
		CLASS_BYTES | CLASS_STR => Some(8),
		_ => None,
	}
}

fn read_n<'a, T>(cursor: &mut Cursor<'a>, count: usize, mut read: impl FnMut(&mut Cursor<'a>) -> Result<T>) -> Result<Vec<T>> {
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		out.push(read(cursor)?);
	}
	Ok(out)
}

fn read_bool(cursor: &mut Cursor<'_>) -> Result<bool> {
	let at = cursor.pos();
	match cursor.read_u8()? {
		0 => Ok(false),
		1 => Ok(true),
		_ => Err(StoreError::InvalidRecord {
			at,
			reason: "bool byte is not 0 or 1",
		}),
	}
}

fn read_complex(cursor: &mut Cursor<'_>) -> Result<Complex> {
	let re = cursor.read_f64_le()?;
	let im = cursor.read_f64_le()?;
	Ok(Complex { re, im })
}

#[cfg(test)]
mod tests {
	use super::{decode_payload, encode_payload};
	use crate::store::{Array, Complex, Payload, Scalar, StoreError};

	#[test]
	fn mixed_payloads_survive_the_byte_layout() {
		let payloads = [
			Payload::Scalar(Scalar::Complex(Complex::new(3.0, -4.5))),
			Payload::Scalar(Scalar::Bool(true)),
			Payload::Array(Array::Str(vec!["héllo".to_owned(), String::new()])),
			Payload::Array(Array::Bytes(vec![b"\0ab".to_vec()])),
			Payload::Array(Array::Float(Vec::new())),
		];

		for payload in payloads {
			let bytes = encode_payload(&payload);
			assert_eq!(decode_payload(&bytes).expect("payload parses"), payload);
		}
	}

	#[test]
	fn trailing_bytes_are_rejected() {
		let mut bytes = encode_payload(&Payload::Scalar(Scalar::Int(5)));
		bytes.push(0);
		let err = decode_payload(&bytes).expect_err("trailing byte");
		assert!(matches!(err, StoreError::InvalidRecord { .. }));
	}

	#[test]
	fn oversized_count_is_rejected_before_allocating() {
		let mut bytes = vec![1_u8, 1];
		bytes.extend_from_slice(&u64::MAX.to_le_bytes());
		let err = decode_payload(&bytes).expect_err("count exceeds data");
		assert!(matches!(err, StoreError::UnexpectedEof { .. } | StoreError::InvalidRecord { .. }));
	}

	#[test]
	fn count_is_checked_against_element_width() {
		// Four complex elements need 64 bytes; only two are present.
		let mut bytes = vec![1_u8, 4];
		bytes.extend_from_slice(&4_u64.to_le_bytes());
		bytes.extend_from_slice(&[0_u8; 32]);
		let err = decode_payload(&bytes).expect_err("count exceeds data");
		assert!(matches!(err, StoreError::UnexpectedEof { at: 10, need: 64, rem: 32 }));

		let mut bytes = vec![1_u8, 6];
		bytes.extend_from_slice(&3_u64.to_le_bytes());
		bytes.extend_from_slice(&[0_u8; 16]);
		let err = decode_payload(&bytes).expect_err("three strings need three length prefixes");
		assert!(matches!(err, StoreError::UnexpectedEof { need: 24, rem: 16, .. }));
	}

	#[test]
	fn unknown_array_class_is_rejected() {
		let mut bytes = vec![1_u8, 9];
		bytes.extend_from_slice(&0_u64.to_le_bytes());
		let err = decode_payload(&bytes).expect_err("class 9");
		assert!(matches!(err, StoreError::InvalidRecord { at: 1, .. }));
	}
}
