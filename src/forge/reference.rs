use std::fmt;

use crate::forge::container::PackCtx;
use crate::forge::{FieldPath, ForgeError, Result, ScalarField};

/// How a reference field derives its carrier value from the target's bytes.
pub enum RefMode {
	/// Carrier holds the byte length of the target's packed form.
	Length,
	/// Carrier holds the reducer's result over the target's packed bytes.
	Reducer(Box<dyn Fn(&[u8]) -> u64>),
}

impl fmt::Debug for RefMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Length => f.write_str("Length"),
			Self::Reducer(_) => f.write_str("Reducer"),
		}
	}
}

/// Field whose value is computed from another node's packed bytes at pack time.
///
/// The field contributes only the carrier's packed bytes at its own tree
/// position; the target subtree serializes independently at its own position.
/// Nothing is persisted between packs: every pack re-resolves the target
/// against the container `pack` was invoked on, so the target may sit
/// anywhere in the tree, before or after this field.
#[derive(Debug)]
pub struct ReferenceField {
	carrier: ScalarField,
	target: FieldPath,
	mode: RefMode,
}

impl ReferenceField {
	/// Pair an integer carrier with a target path and resolution mode.
	pub fn new(carrier: ScalarField, target: FieldPath, mode: RefMode) -> Result<Self> {
		if carrier.kind().width().is_none() {
			return Err(ForgeError::ValueTypeMismatch {
				expected: "integer carrier",
				got: "buffer",
			});
		}

		Ok(Self { carrier, target, mode })
	}

	/// Reference carrying the target's packed byte length.
	pub fn length_of(carrier: ScalarField, target: FieldPath) -> Result<Self> {
		Self::new(carrier, target, RefMode::Length)
	}

	/// Reference carrying a caller-supplied reduction of the target's packed bytes.
	pub fn reduced<F>(carrier: ScalarField, target: FieldPath, reducer: F) -> Result<Self>
	where
		F: Fn(&[u8]) -> u64 + 'static,
	{
		Self::new(carrier, target, RefMode::Reducer(Box::new(reducer)))
	}

	/// Carrier codec template.
	pub fn carrier(&self) -> &ScalarField {
		&self.carrier
	}

	/// Target path resolved from the packing root.
	pub fn target(&self) -> &FieldPath {
		&self.target
	}

	pub(crate) fn pack_with(&self, ctx: &mut PackCtx<'_>) -> Result<Vec<u8>> {
		let key = self as *const Self;
		if ctx.in_flight.contains(&key) {
			return Err(ForgeError::ReferenceCycle {
				path: self.target.to_string(),
			});
		}

		let root = ctx.root;
		let target = root.node_at(&self.target)?;

		// The target pack is a side traversal, not part of the primary
		// serialization; observers only see the primary one.
		ctx.in_flight.push(key);
		let observer = ctx.observer.take();
		let packed = target.pack(ctx);
		ctx.observer = observer;
		ctx.in_flight.pop();
		let bytes = packed?;

		let raw = match &self.mode {
			RefMode::Length => bytes.len() as u64,
			RefMode::Reducer(reducer) => reducer(&bytes),
		};
		Ok(self.carrier.pack_raw(raw))
	}

	/// Mode and target path label.
	pub fn describe(&self) -> String {
		match self.mode {
			RefMode::Length => format!("Length Reference -> {}", self.target),
			RefMode::Reducer(_) => format!("Reduced Reference -> {}", self.target),
		}
	}
}
