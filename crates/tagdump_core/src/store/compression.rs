use std::io::Read;

use tracing::trace;

use crate::store::{Result, StoreError};

/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression applied to a stored payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw bytes.
	None,
	/// zstd frame.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	/// On-disk marker byte.
	pub fn marker(self) -> u8 {
		match self {
			Self::None => 0,
			Self::Zstd => 1,
		}
	}

	/// Parse an on-disk marker byte.
	pub fn from_marker(marker: u8) -> Option<Self> {
		match marker {
			0 => Some(Self::None),
			1 => Some(Self::Zstd),
			_ => None,
		}
	}
}

/// Compress `raw` according to `level`, returning the mode used and the stored bytes.
pub fn encode_bytes(raw: Vec<u8>, level: Option<i32>) -> Result<(Compression, Vec<u8>)> {
	let Some(level) = level else {
		return Ok((Compression::None, raw));
	};

	let out = zstd::stream::encode_all(raw.as_slice(), level)?;
	trace!(level, raw = raw.len(), stored = out.len(), "compressed payload");
	Ok((Compression::Zstd, out))
}

/// Restore stored bytes, bounding the inflated size by `limit`.
pub fn decode_bytes(mode: Compression, stored: &[u8], limit: usize) -> Result<Vec<u8>> {
	match mode {
		Compression::None => Ok(stored.to_vec()),
		Compression::Zstd => decode_zstd(stored, limit),
	}
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Err(StoreError::InvalidRecord {
			at: 0,
			reason: "payload marked zstd lacks frame magic",
		});
	}

	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(StoreError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes, encode_bytes};
	use crate::store::StoreError;

	#[test]
	fn zstd_round_trips_and_respects_limit() {
		let raw = vec![7_u8; 4096];
		let (mode, stored) = encode_bytes(raw.clone(), Some(3)).expect("compresses");
		assert_eq!(mode, Compression::Zstd);
		assert!(stored.len() < raw.len(), "repetitive input should shrink");

		let restored = decode_bytes(mode, &stored, raw.len()).expect("inflates within limit");
		assert_eq!(restored, raw);

		let err = decode_bytes(mode, &stored, 100).expect_err("limit should trip");
		assert!(matches!(err, StoreError::DecompressedTooLarge { limit: 100 }));
	}

	#[test]
	fn no_level_keeps_raw_bytes() {
		let (mode, stored) = encode_bytes(b"abc".to_vec(), None).expect("raw passthrough");
		assert_eq!(mode, Compression::None);
		assert_eq!(stored, b"abc");
	}

	#[test]
	fn unknown_marker_is_rejected() {
		assert_eq!(Compression::from_marker(1), Some(Compression::Zstd));
		assert_eq!(Compression::from_marker(9), None);
	}
}
