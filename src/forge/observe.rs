/// Callback invoked for every node serialized by
/// [`Container::pack_with_observer`](crate::forge::Container::pack_with_observer).
///
/// The packing engine emits no diagnostics of its own; callers inject
/// whatever they need at the pack boundary.
pub trait PackObserver {
	/// Called after a node is packed, with its dotted path, kind name, and packed size.
	fn on_packed(&mut self, path: &str, kind: &'static str, len: usize);
}

impl<F> PackObserver for F
where
	F: FnMut(&str, &'static str, usize),
{
	fn on_packed(&mut self, path: &str, kind: &'static str, len: usize) {
		self(path, kind, len)
	}
}
