//! Public library API for declaratively building byte-exact binary payloads.

/// Field tree assembly, scalar codecs, and pack-time derived fields.
pub mod forge;
