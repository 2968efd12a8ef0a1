//! Opaque parameter-blob persistence collaborator.
//!
//! Applications embedding the topology network often carry parameter objects
//! (world configuration, camera settings) that must round-trip through a
//! binary stream. That persistence is entirely independent of the topology
//! graph: the network never serializes itself, it only defines the symmetric
//! save/load contract the external collaborator implements.

use std::io::{Read, Write};

/// Symmetric binary save/load for an opaque parameter object.
///
/// `save` and `load` must be inverses: loading from a stream produced by
/// `save` restores an equivalent object. The byte layout is entirely the
/// implementor's business.
pub trait OpaqueParams {
    /// Write the object to a binary sink.
    fn save(&self, sink: &mut dyn Write) -> std::io::Result<()>;
    /// Replace `self` with the object read from a binary source.
    fn load(&mut self, source: &mut dyn Read) -> std::io::Result<()>;
}
