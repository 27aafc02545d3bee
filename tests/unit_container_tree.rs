#![allow(missing_docs)]

use dataforge::forge::{Container, FieldPath, ForgeError, Node, ScalarField};

fn path(input: &str) -> FieldPath {
	FieldPath::parse(input).expect("path parses")
}

#[test]
fn nested_tree_serializes_depth_first_in_insertion_order() {
	let mut root = Container::new();
	root.add("test", ScalarField::u32(0x1337));
	let mut sub = Container::new();
	sub.add("test_val", ScalarField::u16(0xAABB));
	root.add("sub", sub);

	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00\xbb\xaa");
}

#[test]
fn incremental_build_matches_reference_byte_stream() {
	let mut root = Container::new();
	root.add("test", ScalarField::u32(0x1337));
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00");

	root.add("sub", Container::new());
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00");

	root.add_at(&path("sub.test_sub_container"), Container::new()).expect("sub exists");
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00");

	root.add_at(&path("sub.test_sub_container.test"), ScalarField::u16(0xAABB))
		.expect("chain exists");
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00\xbb\xaa");

	root.add_at(&path("sub.test_sub_container.another"), ScalarField::u16(0xCCDD))
		.expect("chain exists");
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00\xbb\xaa\xdd\xcc");

	root.add("upper", ScalarField::u8(b'A' as i64));
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00\xbb\xaa\xdd\xcc\x41");

	// A later insert into an earlier subtree serializes at the subtree's
	// position, not at the end of the stream.
	root.add_at(&path("sub.inner_insert"), ScalarField::u8(b'B' as i64)).expect("sub exists");
	assert_eq!(root.pack().expect("tree packs"), *b"\x37\x13\x00\x00\xbb\xaa\xdd\xcc\x42\x41");
}

#[test]
fn intermediates_are_never_auto_created() {
	let mut root = Container::new();
	let err = root
		.add_at(&path("ghost.leaf"), ScalarField::u8(1))
		.expect_err("ghost was never attached");
	assert!(matches!(err, ForgeError::TargetNotFound { .. }));
	assert!(root.is_empty());
}

#[test]
fn typed_accessors_return_attached_children() {
	let mut root = Container::new();
	root.add("value", ScalarField::u16(0x0102));
	root.add("sub", Container::new());

	assert_eq!(
		root.get("value").and_then(Node::as_scalar).and_then(ScalarField::int_value),
		Some(0x0102)
	);
	assert!(root.get("sub").and_then(Node::as_container).is_some());
	assert!(root.get("absent").is_none());

	let node = root.node_at_mut(&path("value")).expect("path resolves");
	node.as_scalar_mut().expect("scalar node").set_int(0x0304).expect("integer accepted");
	assert_eq!(root.pack().expect("tree packs"), [0x04, 0x03]);
}

#[test]
fn length_reports_packed_size() {
	let mut root = Container::new();
	root.add("a", ScalarField::u32(0));
	root.add("b", ScalarField::u8(0));
	assert_eq!(root.length().expect("tree packs"), 5);
}

#[test]
fn describe_dumps_the_whole_tree() {
	let mut root = Container::new();
	root.add("test", ScalarField::u32(0x1337));
	root.add("test2", ScalarField::u8(b'A' as i64));
	let mut sub = Container::new();
	sub.add("test_val", ScalarField::u16(0xAABB));
	sub.add("buf", ScalarField::buffer(vec![0x41; 100]));
	root.add("sub", sub);

	let dump = root.describe(0);
	assert!(dump.contains("Unsigned Long 0x00001337"));
	assert!(dump.contains("test_val"));
	assert!(dump.contains("+sub"));
	assert!(dump.contains("Buffer"));
}
