use std::fs;
use std::path::Path;

use tracing::debug;

use crate::store::bytes::{Cursor, Writer};
use crate::store::record::{read_record, write_end, write_record};
use crate::store::{MemGroup, ReadOptions, Result, StoreError, StoreHeader};

/// Single-file persisted form of a [`MemGroup`].
#[derive(Debug)]
pub struct StoreFile {
	/// Parsed file header.
	pub header: StoreHeader,
	/// Group rebuilt from the file's records.
	pub group: MemGroup,
}

impl StoreFile {
	/// Read and parse a store file from disk with default read limits.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, ReadOptions::default())
	}

	/// Read and parse a store file from disk.
	pub fn open_with(path: impl AsRef<Path>, read_options: ReadOptions) -> Result<Self> {
		let path = path.as_ref();
		let bytes = fs::read(path)?;
		let file = Self::parse(&bytes, read_options)?;
		debug!(path = %path.display(), nodes = file.group.len(), "opened store file");
		Ok(file)
	}

	/// Parse a store file image.
	pub fn parse(bytes: &[u8], read_options: ReadOptions) -> Result<Self> {
		let header = StoreHeader::parse(bytes)?;
		let mut cursor = Cursor::new(&bytes[StoreHeader::SIZE..]);
		let mut group = MemGroup::with_read_options(read_options);

		while let Some(node) = read_record(&mut cursor)? {
			group.insert_stored(node)?;
		}
		if cursor.remaining() > 0 {
			return Err(StoreError::InvalidRecord {
				at: cursor.pos(),
				reason: "trailing bytes after end record",
			});
		}

		Ok(Self { header, group })
	}

	/// Serialize `group` into a store file image.
	pub fn to_bytes(group: &MemGroup) -> Result<Vec<u8>> {
		let mut out = Writer::new();
		out.put_bytes(&StoreHeader::current().to_bytes());
		for handle in group.handles() {
			write_record(&mut out, group.stored(handle)?)?;
		}
		write_end(&mut out);
		Ok(out.into_inner())
	}

	/// Write `group` to `path`, replacing any existing file.
	pub fn save(group: &MemGroup, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let bytes = Self::to_bytes(group)?;
		fs::write(path, &bytes)?;
		debug!(path = %path.display(), nodes = group.len(), bytes = bytes.len(), "saved store file");
		Ok(())
	}
}

#[cfg(test)]
mod tests;
