use tagdump_testkit::scratch_dir;

use crate::store::{Complex, Compression, Group, MemGroup, ReadOptions, Registry, StorageOptions, StoreError, StoreFile, StoreHeader, Value};

fn sample_group(options: &StorageOptions) -> MemGroup {
	let registry = Registry::global();
	let mut group = MemGroup::new();
	let values = [
		Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
		Value::from("text"),
		Value::bytes(*b"\x00\xffraw"),
		Value::Complex(Complex::new(3.0, 4.0)),
		Value::None,
	];
	for (position, value) in values.iter().enumerate() {
		registry.encode(value, &mut group, position, options).expect("sample value encodes");
	}
	group
}

#[test]
fn image_round_trips_nodes_and_attributes() {
	let group = sample_group(&StorageOptions::compressed());
	let bytes = StoreFile::to_bytes(&group).expect("image renders");
	assert!(bytes.starts_with(b"TAGDUMP01v"));
	assert!(bytes.ends_with(b"ENDR"));

	let file = StoreFile::parse(&bytes, ReadOptions::default()).expect("image parses");
	assert_eq!(file.header, StoreHeader::current());
	assert_eq!(file.group.len(), group.len());

	for handle in group.handles() {
		assert_eq!(file.group.read(handle).expect("reparsed node reads"), group.read(handle).expect("written node reads"));
		assert_eq!(file.group.compression_of(handle).ok(), group.compression_of(handle).ok());
	}
	let first = file.group.child("data_0").expect("data_0 exists");
	assert_eq!(file.group.compression_of(first).expect("valid handle"), Compression::Zstd);
}

#[test]
fn truncated_image_is_rejected() {
	let bytes = StoreFile::to_bytes(&sample_group(&StorageOptions::default())).expect("image renders");
	for cut in [StoreHeader::SIZE, bytes.len() / 2, bytes.len() - 1] {
		let err = StoreFile::parse(&bytes[..cut], ReadOptions::default()).expect_err("truncated image fails");
		assert!(matches!(err, StoreError::UnexpectedEof { .. }), "cut at {cut}: {err:?}");
	}
}

#[test]
fn unknown_record_code_is_rejected() {
	let mut bytes = StoreHeader::current().to_bytes().to_vec();
	bytes.extend_from_slice(b"JUNK");
	let err = StoreFile::parse(&bytes, ReadOptions::default()).expect_err("unknown code");
	assert!(matches!(err, StoreError::InvalidRecord { at: 0, .. }));
}

#[test]
fn bytes_after_end_record_are_rejected() {
	let group = sample_group(&StorageOptions::default());
	let mut bytes = StoreFile::to_bytes(&group).expect("image renders");
	let end_at = bytes.len() - StoreHeader::SIZE;
	bytes.extend_from_slice(b"NODE");

	let err = StoreFile::parse(&bytes, ReadOptions::default()).expect_err("data after ENDR");
	assert!(matches!(err, StoreError::InvalidRecord { at, .. } if at == end_at));
}

#[test]
fn saved_file_decodes_in_position_order() {
	let dir = scratch_dir();
	let path = dir.path().join("file_round_trip.tds");
	StoreFile::save(&sample_group(&StorageOptions::default()), &path).expect("file saves");

	let file = StoreFile::open(&path).expect("file opens");
	let registry = Registry::global();
	let values: Vec<Value> = (0..file.group.len())
		.map(|position| registry.decode_child(&file.group, position).expect("node decodes"))
		.collect();

	assert_eq!(values[1], Value::from("text"));
	assert_eq!(values[3], Value::Complex(Complex::new(3.0, 4.0)));
	assert_eq!(values[4], Value::None);
}
