mod container;
mod error;
mod length;
mod observe;
mod path;
mod reference;
mod scalar;

/// Ordered field tree and the child node sum type.
pub use container::{Container, Node};
/// Error and result aliases.
pub use error::{ForgeError, Result};
/// Length-prefixed container embedding.
pub use length::LengthField;
/// Pack-time observation callback trait.
pub use observe::PackObserver;
/// Structural path type for addressing nested children.
pub use path::FieldPath;
/// Pack-time derived reference field and its resolution modes.
pub use reference::{RefMode, ReferenceField};
/// Scalar codec kinds, byte order, and the leaf field type.
pub use scalar::{Endianness, ScalarField, ScalarKind};
