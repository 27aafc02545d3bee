use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Errors produced while assembling and packing field trees.
#[derive(Debug, Error)]
pub enum ForgeError {
	/// Byte-sequence value was longer than the receiving field's width.
	#[error("value of {len} bytes exceeds field width {width}")]
	ValueOutOfRange {
		/// Fixed width of the receiving field.
		width: usize,
		/// Length of the rejected byte sequence.
		len: usize,
	},
	/// Value of an unsupported kind was supplied to a field.
	#[error("value type mismatch: expected {expected}, got {got}")]
	ValueTypeMismatch {
		/// Value kind the field accepts.
		expected: &'static str,
		/// Value kind that was supplied.
		got: &'static str,
	},
	/// Byte-order selector string was not recognized.
	#[error("unknown endianness selector: {selector}")]
	UnknownEndianness {
		/// User-provided selector string.
		selector: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path did not lead to a node in the tree.
	#[error("target not found: {path}")]
	TargetNotFound {
		/// Dotted path that failed to resolve.
		path: String,
	},
	/// Intermediate path segment names a node that cannot hold children.
	#[error("segment {segment} of {path} does not name a container")]
	NotAContainer {
		/// Full dotted path being resolved.
		path: String,
		/// Offending segment.
		segment: String,
	},
	/// Reference resolution re-entered a reference already being resolved.
	#[error("reference cycle detected at {path}")]
	ReferenceCycle {
		/// Target path of the re-entered reference.
		path: String,
	},
}
