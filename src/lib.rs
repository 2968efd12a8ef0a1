//! # brep-net
//!
//! brep-net is an in-memory boundary-representation topology network. It models
//! the hierarchy of mutable topological entities (vertex, edge, zero-chain,
//! one-chain, face, two-chain, block) linked through reciprocal
//! inferior/superior relations, the way 1D/2D/3D objects are built from, and
//! belong to, lower/higher-dimensional objects.
//!
//! ## Features
//! - Arena-indexed entity network with strong [`EntityId`](topology::point::EntityId) handles
//! - Type-validated linking: an entity only accepts inferiors/superiors of the
//!   adjacent rank, and every link is mirrored in both directions
//! - Shared (non-tree) structure: an edge may belong to several loops, a face
//!   to several shells; inferior links carry ownership, superior links do not
//! - Modification stamps with upward invalidation and lazily recomputed,
//!   de-duplicated closure queries
//! - Cascade teardown that unlinks every remaining relation before an entity
//!   is collected, so no live entity ever holds a dangling reference
//!
//! ## Concurrency
//! The network is a single-writer mutable graph with no built-in
//! synchronization. All operations are synchronous and non-blocking; concurrent
//! mutation requires an external lock scoped to the whole network, since one
//! mutation can touch entities across several dimensions via upward
//! invalidation.
//!
//! ## Usage
//! ```rust
//! use brep_net::prelude::*;
//!
//! let mut net = Network::<LineSegment>::new();
//! let a = net.new_vertex(Point3::new(0.0, 0.0, 0.0));
//! let b = net.new_vertex(Point3::new(1.0, 1.0, 0.0));
//! let e = net.new_edge_between(a, b, None).unwrap();
//! assert_eq!(net.edge_state(e).unwrap(), EdgeState::Bounded);
//! assert_eq!(net.compute_vertices(e).unwrap(), vec![a, b]);
//! ```

// Re-export our major subsystems:
pub mod debug_invariants;
pub mod geometry;
pub mod net_error;
pub mod params;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{CurveGeometry, LineSegment, Point3};
    pub use crate::net_error::BrepNetError;
    pub use crate::params::OpaqueParams;
    pub use crate::topology::cache::InvalidateCache;
    pub use crate::topology::edge::EdgeState;
    pub use crate::topology::kind::EntityKind;
    pub use crate::topology::network::{EdgeView, Network, VertexView};
    pub use crate::topology::point::EntityId;
    pub use crate::topology::validation::validate_network;
}
