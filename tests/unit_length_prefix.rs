#![allow(missing_docs)]

use dataforge::forge::{Container, Endianness, LengthField, Node, ScalarField};

fn framed(carrier: ScalarField) -> LengthField {
	LengthField::new(carrier, Container::new()).expect("integer carrier")
}

#[test]
fn carrier_prefixes_inner_bytes_little_endian() {
	let mut root = Container::new();
	let mut len = framed(ScalarField::u16(0));
	len.add("data", ScalarField::u32(0xAABB_CCDD));
	len.add("data2", ScalarField::u8(10));
	root.add("len", len);

	assert_eq!(root.pack().expect("tree packs"), *b"\x05\x00\xdd\xcc\xbb\xaa\x0a");
}

#[test]
fn carrier_prefixes_inner_bytes_big_endian() {
	let mut root = Container::new();
	let mut len = framed(ScalarField::u16(0).with_endianness(Endianness::Big));
	len.add("data", ScalarField::u32(0xAABB_CCDD));
	len.add("data2", ScalarField::u8(10));
	root.add("len", len);

	assert_eq!(root.pack().expect("tree packs"), *b"\x00\x05\xdd\xcc\xbb\xaa\x0a");
}

#[test]
fn value_is_recomputed_on_every_read() {
	let mut len = framed(ScalarField::u16(0));
	len.add("data", ScalarField::u32(0));
	assert_eq!(len.value().expect("inner packs"), 4);

	len.add("more", ScalarField::buffer(vec![0; 10]));
	assert_eq!(len.value().expect("inner packs"), 14);

	// Replacing a child in place changes the count without moving it.
	len.add("more", ScalarField::buffer(vec![0; 2]));
	assert_eq!(len.value().expect("inner packs"), 6);
}

#[test]
fn nested_length_fields_count_inner_carriers() {
	let mut inner = framed(ScalarField::u8(0));
	inner.add("x", ScalarField::u16(0x0102));

	let mut outer = framed(ScalarField::u16(0));
	outer.add("framed", inner);

	let mut root = Container::new();
	root.add("outer", outer);

	// Inner frame packs to 02 02 01; the outer carrier counts all three bytes.
	assert_eq!(root.pack().expect("tree packs"), [0x03, 0x00, 0x02, 0x02, 0x01]);
}

#[test]
fn inner_children_are_reachable_through_the_field() {
	let mut root = Container::new();
	let mut len = framed(ScalarField::u16(0));
	len.add("data", ScalarField::u32(0));
	root.add("len", len);

	let field = root.get("len").and_then(Node::as_length).expect("length node");
	assert_eq!(field.inner().len(), 1);
	assert!(field.inner().get("data").is_some());
	assert_eq!(field.carrier().length(), 2);
}

#[test]
fn describe_shows_the_computed_length() {
	let mut root = Container::new();
	let mut len = framed(ScalarField::u32(0));
	len.add("data", ScalarField::u16(0xAABB));
	root.add("frame", len);

	let dump = root.describe(0);
	assert!(dump.contains("length: 0x2"));
	assert!(dump.contains("data"));
}
