/// Per-call storage options applied when a node is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageOptions {
	/// zstd compression level for array payloads; `None` stores raw bytes.
	pub compression: Option<i32>,
}

impl StorageOptions {
	/// Default level used by [`StorageOptions::compressed`].
	pub const DEFAULT_LEVEL: i32 = 3;

	/// Preset with zstd compression at the default level.
	pub fn compressed() -> Self {
		Self {
			compression: Some(Self::DEFAULT_LEVEL),
		}
	}

	/// Options with compression at `level`.
	pub fn with_level(level: i32) -> Self {
		Self { compression: Some(level) }
	}
}

/// Limits applied when reading stored payloads back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
	/// Maximum bytes a single payload may inflate to.
	pub max_decompressed_bytes: usize,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			max_decompressed_bytes: 512 * 1024 * 1024,
		}
	}
}
