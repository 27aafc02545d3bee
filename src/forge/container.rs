use crate::forge::{FieldPath, ForgeError, LengthField, PackObserver, ReferenceField, Result, ScalarField};

/// One attachable child of a container.
#[derive(Debug)]
pub enum Node {
	/// Fixed-width integer or byte-blob leaf.
	Scalar(ScalarField),
	/// Nested ordered subtree.
	Container(Container),
	/// Length-prefixed subtree embedding.
	Length(LengthField),
	/// Field whose value derives from another node at pack time.
	Reference(ReferenceField),
}

impl Node {
	/// Node kind name for diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Container(_) => "container",
			Self::Length(_) => "length",
			Self::Reference(_) => "reference",
		}
	}

	/// Borrow the scalar leaf, if this node is one.
	pub fn as_scalar(&self) -> Option<&ScalarField> {
		match self {
			Self::Scalar(field) => Some(field),
			_ => None,
		}
	}

	/// Mutably borrow the scalar leaf, if this node is one.
	pub fn as_scalar_mut(&mut self) -> Option<&mut ScalarField> {
		match self {
			Self::Scalar(field) => Some(field),
			_ => None,
		}
	}

	/// Borrow the subtree container, if this node is one.
	pub fn as_container(&self) -> Option<&Container> {
		match self {
			Self::Container(container) => Some(container),
			_ => None,
		}
	}

	/// Mutably borrow the subtree container, if this node is one.
	pub fn as_container_mut(&mut self) -> Option<&mut Container> {
		match self {
			Self::Container(container) => Some(container),
			_ => None,
		}
	}

	/// Borrow the length field, if this node is one.
	pub fn as_length(&self) -> Option<&LengthField> {
		match self {
			Self::Length(length) => Some(length),
			_ => None,
		}
	}

	/// Mutably borrow the length field, if this node is one.
	pub fn as_length_mut(&mut self) -> Option<&mut LengthField> {
		match self {
			Self::Length(length) => Some(length),
			_ => None,
		}
	}

	/// Borrow the reference field, if this node is one.
	pub fn as_reference(&self) -> Option<&ReferenceField> {
		match self {
			Self::Reference(reference) => Some(reference),
			_ => None,
		}
	}

	pub(crate) fn pack(&self, ctx: &mut PackCtx<'_>) -> Result<Vec<u8>> {
		let bytes = match self {
			Self::Scalar(field) => field.pack(),
			Self::Container(container) => container.pack_children(ctx)?,
			Self::Length(length) => length.pack_with(ctx)?,
			Self::Reference(reference) => reference.pack_with(ctx)?,
		};

		if let Some(observer) = &mut ctx.observer {
			observer.on_packed(&ctx.trail.join("."), self.kind_name(), bytes.len());
		}

		Ok(bytes)
	}
}

impl From<ScalarField> for Node {
	fn from(field: ScalarField) -> Self {
		Self::Scalar(field)
	}
}

impl From<Container> for Node {
	fn from(container: Container) -> Self {
		Self::Container(container)
	}
}

impl From<LengthField> for Node {
	fn from(length: LengthField) -> Self {
		Self::Length(length)
	}
}

impl From<ReferenceField> for Node {
	fn from(reference: ReferenceField) -> Self {
		Self::Reference(reference)
	}
}

/// Shared state for one pack traversal.
pub(crate) struct PackCtx<'a> {
	/// Scope against which reference target paths resolve.
	pub(crate) root: &'a Container,
	/// Reference fields currently being resolved, for cycle detection.
	pub(crate) in_flight: Vec<*const ReferenceField>,
	/// Optional per-node observation callback.
	pub(crate) observer: Option<&'a mut dyn PackObserver>,
	/// Dotted-name trail to the node being packed.
	pub(crate) trail: Vec<String>,
}

impl<'a> PackCtx<'a> {
	pub(crate) fn new(root: &'a Container, observer: Option<&'a mut dyn PackObserver>) -> Self {
		Self {
			root,
			in_flight: Vec::new(),
			observer,
			trail: Vec::new(),
		}
	}
}

/// Ordered, named tree of packable children.
///
/// Insertion order is the serialization order. The container owns its
/// children exclusively; re-adding an existing name replaces that child in
/// place without moving it.
#[derive(Debug, Default)]
pub struct Container {
	label: Option<String>,
	children: Vec<(String, Node)>,
}

impl Container {
	/// Create an empty container.
	pub fn new() -> Self {
		Self {
			label: None,
			children: Vec::new(),
		}
	}

	/// Diagnostic label assigned when attached under a plain name.
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Number of direct children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Whether the container has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Iterate direct children in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
		self.children.iter().map(|(name, node)| (name.as_str(), node))
	}

	/// Attach `node` under the literal `name`, replacing any existing child in place.
	pub fn add(&mut self, name: impl Into<String>, node: impl Into<Node>) -> &mut Self {
		let name = name.into();
		let mut node = node.into();
		match &mut node {
			Node::Container(container) => container.label = Some(name.clone()),
			Node::Length(length) => length.set_label(name.clone()),
			Node::Scalar(_) | Node::Reference(_) => {}
		}

		if let Some(slot) = self.children.iter_mut().find(|(existing, _)| *existing == name) {
			slot.1 = node;
		} else {
			self.children.push((name, node));
		}

		self
	}

	/// Attach `node` at a structural path; intermediate containers must already exist.
	pub fn add_at(&mut self, path: &FieldPath, node: impl Into<Node>) -> Result<&mut Self> {
		let Some((last, walk)) = path.segments().split_last() else {
			return Err(ForgeError::InvalidFieldPath { path: path.to_string() });
		};

		self.descend_mut(path, walk)?.add(last.clone(), node);
		Ok(self)
	}

	/// Child node under a literal name.
	pub fn get(&self, name: &str) -> Option<&Node> {
		self.children.iter().find(|(existing, _)| existing == name).map(|(_, node)| node)
	}

	/// Mutable child node under a literal name.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
		self.children.iter_mut().find(|(existing, _)| existing == name).map(|(_, node)| node)
	}

	/// Resolve a structural path to a node, seeing through length-field namespaces.
	pub fn node_at(&self, path: &FieldPath) -> Result<&Node> {
		let Some((last, walk)) = path.segments().split_last() else {
			return Err(ForgeError::InvalidFieldPath { path: path.to_string() });
		};

		self.descend(path, walk)?
			.get(last)
			.ok_or_else(|| ForgeError::TargetNotFound { path: path.to_string() })
	}

	/// Mutable variant of [`node_at`](Self::node_at).
	pub fn node_at_mut(&mut self, path: &FieldPath) -> Result<&mut Node> {
		let Some((last, walk)) = path.segments().split_last() else {
			return Err(ForgeError::InvalidFieldPath { path: path.to_string() });
		};

		self.descend_mut(path, walk)?
			.get_mut(last)
			.ok_or_else(|| ForgeError::TargetNotFound { path: path.to_string() })
	}

	fn descend(&self, path: &FieldPath, walk: &[String]) -> Result<&Container> {
		let Some((segment, rest)) = walk.split_first() else {
			return Ok(self);
		};

		self.child_container(path, segment)?.descend(path, rest)
	}

	fn descend_mut(&mut self, path: &FieldPath, walk: &[String]) -> Result<&mut Container> {
		let Some((segment, rest)) = walk.split_first() else {
			return Ok(self);
		};

		self.child_container_mut(path, segment)?.descend_mut(path, rest)
	}

	fn child_container(&self, path: &FieldPath, segment: &str) -> Result<&Container> {
		let Some(node) = self.get(segment) else {
			return Err(ForgeError::TargetNotFound { path: path.to_string() });
		};

		match node {
			Node::Container(container) => Ok(container),
			Node::Length(length) => Ok(length.inner()),
			Node::Scalar(_) | Node::Reference(_) => Err(ForgeError::NotAContainer {
				path: path.to_string(),
				segment: segment.to_owned(),
			}),
		}
	}

	fn child_container_mut(&mut self, path: &FieldPath, segment: &str) -> Result<&mut Container> {
		let Some(node) = self.get_mut(segment) else {
			return Err(ForgeError::TargetNotFound { path: path.to_string() });
		};

		match node {
			Node::Container(container) => Ok(container),
			Node::Length(length) => Ok(length.inner_mut()),
			Node::Scalar(_) | Node::Reference(_) => Err(ForgeError::NotAContainer {
				path: path.to_string(),
				segment: segment.to_owned(),
			}),
		}
	}

	/// Serialize every child depth-first, left to right in insertion order.
	///
	/// Reference target paths resolve against this container, so `pack` is
	/// normally called once on the outermost root.
	pub fn pack(&self) -> Result<Vec<u8>> {
		let mut ctx = PackCtx::new(self, None);
		self.pack_children(&mut ctx)
	}

	/// Serialize as [`pack`](Self::pack), reporting each packed node to `observer`.
	pub fn pack_with_observer(&self, observer: &mut dyn PackObserver) -> Result<Vec<u8>> {
		let mut ctx = PackCtx::new(self, Some(observer));
		self.pack_children(&mut ctx)
	}

	/// Total packed byte length.
	pub fn length(&self) -> Result<usize> {
		Ok(self.pack()?.len())
	}

	pub(crate) fn pack_children(&self, ctx: &mut PackCtx<'_>) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		for (name, node) in &self.children {
			ctx.trail.push(name.clone());
			let bytes = node.pack(ctx)?;
			ctx.trail.pop();
			out.extend_from_slice(&bytes);
		}
		Ok(out)
	}

	/// Indented diagnostic dump of the subtree.
	pub fn describe(&self, indent: usize) -> String {
		let pad = " ".repeat(indent);
		let mut out = format!("{}+{}\n", pad, self.label.as_deref().unwrap_or(""));
		out.push_str(&self.describe_children(indent));
		out
	}

	pub(crate) fn describe_children(&self, indent: usize) -> String {
		let pad = " ".repeat(indent);
		let mut out = String::new();
		for (name, node) in &self.children {
			match node {
				Node::Container(container) => out.push_str(&container.describe(indent + 1)),
				Node::Length(length) => out.push_str(&length.describe(indent + 1)),
				Node::Scalar(field) => {
					out.push_str(&format!("{} |- {} : {}\n", pad, field.describe(), name));
				}
				Node::Reference(reference) => {
					out.push_str(&format!("{} |- {} : {}\n", pad, reference.describe(), name));
				}
			}
		}
		out
	}
}
