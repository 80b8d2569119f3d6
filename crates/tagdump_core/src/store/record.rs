use crate::store::bytes::{Cursor, Writer};
use crate::store::mem::StoredNode;
use crate::store::{AttrValue, Attributes, Compression, Result, StoreError};

/// Record code introducing a node.
pub const NODE_CODE: [u8; 4] = *b"NODE";
/// Record code terminating the record stream.
pub const END_CODE: [u8; 4] = *b"ENDR";

const ATTR_BYTES: u8 = 0;
const ATTR_BYTES_LIST: u8 = 1;

/// Append one node record.
pub fn write_record(out: &mut Writer, node: &StoredNode) -> Result<()> {
	out.put_bytes(&NODE_CODE);
	put_short_str(out, &node.name)?;

	out.put_u16_le(short_len(node.attrs.len())?);
	for (name, value) in &node.attrs {
		put_short_str(out, name)?;
		match value {
			AttrValue::Bytes(bytes) => {
				out.put_u8(ATTR_BYTES);
				out.put_blob(bytes);
			}
			AttrValue::BytesList(items) => {
				out.put_u8(ATTR_BYTES_LIST);
				out.put_u64_le(items.len() as u64);
				for item in items {
					out.put_blob(item);
				}
			}
		}
	}

	out.put_u8(node.compression.marker());
	out.put_blob(&node.bytes);
	Ok(())
}

/// Append the end-of-records marker.
pub fn write_end(out: &mut Writer) {
	out.put_bytes(&END_CODE);
}

/// Read the next record; `None` at the end marker.
pub fn read_record(cursor: &mut Cursor<'_>) -> Result<Option<StoredNode>> {
	let at = cursor.pos();
	let code = cursor.read_code4()?;
	if code == END_CODE {
		return Ok(None);
	}
	if code != NODE_CODE {
		return Err(StoreError::InvalidRecord { at, reason: "unknown record code" });
	}

	let name = read_short_str(cursor, "node name")?;

	let attr_count = cursor.read_u16_le()?;
	let mut attrs = Attributes::new();
	for _ in 0..attr_count {
		let attr_name = read_short_str(cursor, "attribute name")?;
		let marker_at = cursor.pos();
		let value = match cursor.read_u8()? {
			ATTR_BYTES => AttrValue::Bytes(cursor.read_blob()?.to_vec()),
			ATTR_BYTES_LIST => {
				let count = cursor.read_len_u64()?;
				// Each item carries at least its u64 length prefix.
				let need = count.saturating_mul(8);
				if need > cursor.remaining() {
					return Err(StoreError::UnexpectedEof {
						at: cursor.pos(),
						need,
						rem: cursor.remaining(),
					});
				}
				let mut items = Vec::with_capacity(count);
				for _ in 0..count {
					items.push(cursor.read_blob()?.to_vec());
				}
				AttrValue::BytesList(items)
			}
			_ => {
				return Err(StoreError::InvalidRecord {
					at: marker_at,
					reason: "unknown attribute marker",
				});
			}
		};
		attrs.insert(attr_name, value);
	}

	let marker_at = cursor.pos();
	let compression = Compression::from_marker(cursor.read_u8()?).ok_or(StoreError::InvalidRecord {
		at: marker_at,
		reason: "unknown compression marker",
	})?;
	let bytes = cursor.read_blob()?.to_vec();

	Ok(Some(StoredNode {
		name,
		attrs,
		compression,
		bytes,
	}))
}

fn short_len(len: usize) -> Result<u16> {
	u16::try_from(len).map_err(|_| StoreError::InvalidRecord {
		at: 0,
		reason: "name or attribute table longer than u16::MAX",
	})
}

fn put_short_str(out: &mut Writer, value: &str) -> Result<()> {
	out.put_u16_le(short_len(value.len())?);
	out.put_bytes(value.as_bytes());
	Ok(())
}

fn read_short_str(cursor: &mut Cursor<'_>, what: &'static str) -> Result<String> {
	let len = usize::from(cursor.read_u16_le()?);
	let raw = cursor.read_exact(len)?;
	String::from_utf8(raw.to_vec()).map_err(|_| StoreError::InvalidUtf8 { what })
}
