use crate::store::{Result, StoreError};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(StoreError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(u16::from_le_bytes(buf))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64_le(&mut self) -> Result<u64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(u64::from_le_bytes(buf))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64_le(&mut self) -> Result<i64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(i64::from_le_bytes(buf))
	}

	/// Read a little-endian `f64`.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_bits(self.read_u64_le()?))
	}

	/// Read a `u64` length and convert it to `usize`, rejecting lengths past the end.
	pub fn read_len_u64(&mut self) -> Result<usize> {
		let at = self.pos;
		let raw = self.read_u64_le()?;
		let len = usize::try_from(raw).map_err(|_| StoreError::InvalidRecord { at, reason: "length overflows usize" })?;
		Ok(len)
	}

	/// Read a `u64` length prefix followed by that many bytes.
	pub fn read_blob(&mut self) -> Result<&'a [u8]> {
		let len = self.read_len_u64()?;
		self.read_exact(len)
	}
}

/// Little-endian byte sink mirroring [`Cursor`].
#[derive(Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append raw bytes.
	pub fn put_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Append one byte.
	pub fn put_u8(&mut self, value: u8) {
		self.buf.push(value);
	}

	/// Append a little-endian `u16`.
	pub fn put_u16_le(&mut self, value: u16) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `u64`.
	pub fn put_u64_le(&mut self, value: u64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i64`.
	pub fn put_i64_le(&mut self, value: i64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `f64`.
	pub fn put_f64_le(&mut self, value: f64) {
		self.put_u64_le(value.to_bits());
	}

	/// Append a `u64` length prefix and the bytes.
	pub fn put_blob(&mut self, bytes: &[u8]) {
		self.put_u64_le(bytes.len() as u64);
		self.put_bytes(bytes);
	}

	/// Finish and return the written bytes.
	pub fn into_inner(self) -> Vec<u8> {
		self.buf
	}
}
