use crate::store::{Result, StoreError};

/// Parsed store file header: `TAGDUMP`, two-digit format version, endianness marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHeader {
	/// Container format version.
	pub format_version: u16,
}

impl StoreHeader {
	/// Leading magic bytes.
	pub const MAGIC: &'static [u8; 7] = b"TAGDUMP";
	/// Header size in bytes.
	pub const SIZE: usize = 10;
	/// Format version this build reads and writes.
	pub const FORMAT_VERSION: u16 = 1;

	/// Header for the current format version.
	pub fn current() -> Self {
		Self {
			format_version: Self::FORMAT_VERSION,
		}
	}

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(0..Self::SIZE).ok_or(StoreError::InvalidHeader)?;
		if &header[0..7] != Self::MAGIC {
			return Err(StoreError::InvalidHeader);
		}

		let format_version = parse_digits(&header[7..9]).ok_or(StoreError::InvalidHeader)?;
		if format_version != Self::FORMAT_VERSION {
			return Err(StoreError::UnsupportedFormatVersion {
				version: format_version,
				expected: Self::FORMAT_VERSION,
			});
		}

		// Only little-endian stores are written.
		if header[9] != b'v' {
			return Err(StoreError::InvalidHeader);
		}

		Ok(Self { format_version })
	}

	/// Render header bytes.
	pub fn to_bytes(self) -> [u8; Self::SIZE] {
		let mut out = [0_u8; Self::SIZE];
		out[0..7].copy_from_slice(Self::MAGIC);
		let version = self.format_version % 100;
		out[7] = b'0' + (version / 10) as u8;
		out[8] = b'0' + (version % 10) as u8;
		out[9] = b'v';
		out
	}
}

fn parse_digits(bytes: &[u8]) -> Option<u16> {
	if bytes.is_empty() {
		return None;
	}

	let mut value = 0_u16;
	for byte in bytes {
		if !byte.is_ascii_digit() {
			return None;
		}
		value = value * 10 + u16::from(*byte - b'0');
	}
	Some(value)
}
