use crate::store::{
	Array, AttrValue, Complex, Compression, Group, MemGroup, Payload, Registry, SUBTYPE_ATTR, Scalar, StorageOptions, StoreError, TYPE_ATTR, Value,
	encode,
};

fn encode_one(value: &Value, options: &StorageOptions) -> (MemGroup, crate::store::Node) {
	let mut group = MemGroup::new();
	let handle = encode(Registry::global(), value, &mut group, 0, options).expect("value encodes");
	let node = group.read(handle).expect("node reads back");
	(group, node)
}

#[test]
fn containers_record_their_concrete_kind_in_the_tag() {
	let items = vec![Value::Int(1), Value::Int(2)];
	let cases = [
		(Value::List(items.clone()), "<class 'list'>"),
		(Value::Tuple(items.clone()), "<class 'tuple'>"),
		(Value::set(items), "<class 'set'>"),
	];

	for (value, tag) in cases {
		let (_, node) = encode_one(&value, &StorageOptions::default());
		assert_eq!(node.attr(TYPE_ATTR), Some(&AttrValue::tag_list(tag)));
		assert_eq!(node.payload, Payload::Array(Array::Int(vec![1, 2])));
		assert_eq!(node.attr(SUBTYPE_ATTR), None);
	}
}

#[test]
fn scalars_write_zero_dimensional_payload_and_subtype() {
	let cases = [
		(Value::Int(-7), Scalar::Int(-7), "<class 'int'>"),
		(Value::Float(0.5), Scalar::Float(0.5), "<class 'float'>"),
		(Value::Bool(true), Scalar::Bool(true), "<class 'bool'>"),
		(Value::Complex(Complex::new(3.0, 4.0)), Scalar::Complex(Complex::new(3.0, 4.0)), "<class 'complex'>"),
	];

	for (value, scalar, subtype) in cases {
		let (_, node) = encode_one(&value, &StorageOptions::default());
		assert_eq!(node.payload, Payload::Scalar(scalar));
		assert_eq!(node.type_tag(), Some(&b"python_dtype"[..]));
		assert_eq!(node.attr(SUBTYPE_ATTR), Some(&AttrValue::tag(subtype)));
	}
}

#[test]
fn strings_and_bytes_use_different_payloads() {
	let (_, text) = encode_one(&Value::from("ab"), &StorageOptions::default());
	assert_eq!(text.type_tag(), Some(&b"string"[..]));
	assert_eq!(text.payload, Payload::Array(Array::Str(vec!["ab".to_owned()])));

	let (_, bytes) = encode_one(&Value::bytes(*b"ab"), &StorageOptions::default());
	assert_eq!(bytes.type_tag(), Some(&b"bytes"[..]));
	assert_eq!(bytes.payload, Payload::Array(Array::Bytes(vec![b"ab".to_vec()])));
}

#[test]
fn none_writes_zero_placeholder() {
	let (_, node) = encode_one(&Value::None, &StorageOptions::default());
	assert_eq!(node.type_tag(), Some(&b"none"[..]));
	assert_eq!(node.payload, Payload::Array(Array::Int(vec![0])));
}

#[test]
fn compression_is_dropped_for_scalars_and_placeholders_only() {
	let options = StorageOptions::compressed();
	for value in [Value::Int(1), Value::Float(1.5), Value::Bool(false), Value::Complex(Complex::default()), Value::None] {
		let (group, node) = encode_one(&value, &options);
		let handle = group.child(&node.name).expect("node exists");
		assert_eq!(group.compression_of(handle).expect("valid handle"), Compression::None, "{value:?}");
	}

	for value in [Value::List(vec![Value::Int(1)]), Value::from("text"), Value::bytes(*b"raw")] {
		let (group, node) = encode_one(&value, &options);
		let handle = group.child(&node.name).expect("node exists");
		assert_eq!(group.compression_of(handle).expect("valid handle"), Compression::Zstd, "{value:?}");
	}
}

#[test]
fn mixed_int_and_float_are_rejected() {
	let mut group = MemGroup::new();
	let registry = Registry::global();
	let options = StorageOptions::default();

	let err = encode(registry, &Value::List(vec![Value::Int(1), Value::Float(2.5)]), &mut group, 0, &options).expect_err("int and float do not mix");
	assert!(matches!(err, StoreError::HeterogeneousContainer { first: "int", found: "float" }));

	let set = Value::set([Value::Int(1), Value::Float(1.0)]);
	assert!(matches!(&set, Value::Set(items) if items.len() == 2));
	let err = encode(registry, &set, &mut group, 0, &options).expect_err("set would collapse to one float");
	assert!(matches!(err, StoreError::HeterogeneousContainer { first: "int", found: "float" }));

	assert!(group.is_empty());
}

#[test]
fn empty_containers_store_empty_float_array() {
	let (_, node) = encode_one(&Value::Tuple(Vec::new()), &StorageOptions::default());
	assert_eq!(node.payload, Payload::Array(Array::Float(Vec::new())));
}

#[test]
fn unstorable_container_elements_are_rejected() {
	let mut group = MemGroup::new();
	let registry = Registry::global();
	let options = StorageOptions::default();

	let err = encode(registry, &Value::List(vec![Value::Int(1), Value::from("a")]), &mut group, 0, &options).expect_err("int and str do not mix");
	assert!(matches!(err, StoreError::HeterogeneousContainer { first: "int", found: "str" }));

	let err = encode(registry, &Value::List(vec![Value::Bool(true), Value::Int(1)]), &mut group, 0, &options).expect_err("bool and int do not mix");
	assert!(matches!(err, StoreError::HeterogeneousContainer { first: "bool", found: "int" }));

	let nested = Value::Tuple(vec![Value::List(vec![Value::Int(1)])]);
	let err = encode(registry, &nested, &mut group, 0, &options).expect_err("nested containers are not flat");
	assert!(matches!(err, StoreError::UnsupportedElement { kind: "list" }));

	let err = encode(registry, &Value::set([Value::None]), &mut group, 0, &options).expect_err("none is not an array element");
	assert!(matches!(err, StoreError::UnsupportedElement { kind: "NoneType" }));

	assert!(group.is_empty(), "failed encodes must not create nodes");
}

#[test]
fn each_call_creates_exactly_one_new_node() {
	let mut group = MemGroup::new();
	let registry = Registry::global();
	let options = StorageOptions::default();

	registry.encode(&Value::Int(1), &mut group, 0, &options).expect("first encode");
	registry.encode(&Value::from("x"), &mut group, 1, &options).expect("second encode");
	assert_eq!(group.names().collect::<Vec<_>>(), ["data_0", "data_1"]);

	let err = registry.encode(&Value::Int(2), &mut group, 0, &options).expect_err("position 0 is taken");
	assert!(matches!(err, StoreError::NodeExists { .. }));
	assert_eq!(registry.decode_child(&group, 0).expect("first node intact"), Value::Int(1));
}

#[test]
fn converters_reject_kinds_they_do_not_handle() {
	let mut group = MemGroup::new();
	let options = StorageOptions::default();
	let err = crate::store::create_python_dtype_dataset(&Value::from("x"), &mut group, 0, &options).expect_err("str is not numeric");
	assert!(matches!(err, StoreError::UnsupportedType { kind: "str" }));
	let err = crate::store::create_listlike_dataset(&Value::Int(1), &mut group, 0, &options).expect_err("int is not a container");
	assert!(matches!(err, StoreError::UnsupportedType { kind: "int" }));
}
