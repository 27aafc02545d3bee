use crate::forge::container::PackCtx;
use crate::forge::{Container, FieldPath, ForgeError, Node, Result, ScalarField};

/// Container embedding whose packed form is preceded by its own byte length.
///
/// The carrier's value is not persistent state: every read or pack recomputes
/// it from the inner container's current packed size, truncated to the
/// carrier width. Children attached here land in the inner container and are
/// addressable through this field as if they were its own.
#[derive(Debug)]
pub struct LengthField {
	label: Option<String>,
	carrier: ScalarField,
	inner: Container,
}

impl LengthField {
	/// Pair an integer carrier with an inner container.
	pub fn new(carrier: ScalarField, inner: Container) -> Result<Self> {
		if carrier.kind().width().is_none() {
			return Err(ForgeError::ValueTypeMismatch {
				expected: "integer carrier",
				got: "buffer",
			});
		}

		Ok(Self {
			label: None,
			carrier,
			inner,
		})
	}

	pub(crate) fn set_label(&mut self, label: String) {
		self.label = Some(label);
	}

	/// Diagnostic label assigned when attached under a plain name.
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Attach into the inner container under a literal name (chainable).
	pub fn add(&mut self, name: impl Into<String>, node: impl Into<Node>) -> &mut Self {
		self.inner.add(name, node);
		self
	}

	/// Attach into the inner container at a structural path.
	pub fn add_at(&mut self, path: &FieldPath, node: impl Into<Node>) -> Result<&mut Self> {
		self.inner.add_at(path, node)?;
		Ok(self)
	}

	/// Carrier codec template.
	pub fn carrier(&self) -> &ScalarField {
		&self.carrier
	}

	/// Inner container holding the counted children.
	pub fn inner(&self) -> &Container {
		&self.inner
	}

	pub(crate) fn inner_mut(&mut self) -> &mut Container {
		&mut self.inner
	}

	/// Recompute the inner packed length, truncated to the carrier width.
	///
	/// Reference fields inside the inner container resolve against the inner
	/// container here; during a full tree pack they resolve against the pack
	/// root instead.
	pub fn value(&self) -> Result<u64> {
		Ok(self.carrier.truncate(self.inner.pack()?.len() as u64))
	}

	pub(crate) fn pack_with(&self, ctx: &mut PackCtx<'_>) -> Result<Vec<u8>> {
		let inner = self.inner.pack_children(ctx)?;
		let mut out = self.carrier.pack_raw(inner.len() as u64);
		out.extend_from_slice(&inner);
		Ok(out)
	}

	/// Computed length followed by the inner tree.
	pub fn describe(&self, indent: usize) -> String {
		let pad = " ".repeat(indent);
		let length = self.value().unwrap_or(0);
		let mut out = format!("{}+{} length: 0x{:x}\n", pad, self.label.as_deref().unwrap_or(""), length);
		out.push_str(&self.inner.describe_children(indent));
		out
	}
}
