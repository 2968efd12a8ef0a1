//! BrepNetError: unified error type for brep-net public APIs
//!
//! Every fallible operation on the topology network reports through this
//! enum; the graph is left unchanged whenever an error is returned.

use crate::topology::kind::EntityKind;
use crate::topology::point::EntityId;
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for topology-network operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrepNetError {
    /// Attempted to construct an EntityId with a zero value (invalid).
    #[error("EntityId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidEntityId,
    /// The entity is not (or no longer) part of the network.
    #[error("unknown entity `{0}`")]
    UnknownEntity(EntityId),
    /// Link attempt between non-adjacent ranks (e.g. a vertex directly into an edge).
    #[error("type mismatch: a {superior} cannot accept a {inferior} as inferior")]
    TypeMismatch {
        /// Kind of the entity that was asked to accept the inferior.
        superior: EntityKind,
        /// Kind of the rejected inferior.
        inferior: EntityKind,
    },
    /// Unlink of a relation that does not exist.
    #[error("entity `{inferior}` is not an inferior of `{superior}`")]
    NotLinked {
        /// The entity whose inferior table was searched.
        superior: EntityId,
        /// The entity that was not found in it.
        inferior: EntityId,
    },
    /// Endpoint operation on a vertex that is not an endpoint of the edge.
    #[error("vertex `{vertex}` is not an endpoint of edge `{edge}`")]
    NotAnEndpoint {
        /// The edge whose endpoints were consulted.
        edge: EntityId,
        /// The vertex that matched neither endpoint.
        vertex: EntityId,
    },
    /// Degenerate input to a setter or constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An inferior link has no reciprocal superior entry.
    #[error("reciprocity violation: inferior link {superior}->{inferior} has no superior mirror")]
    MissingSuperiorMirror {
        /// Holder of the one-sided inferior link.
        superior: EntityId,
        /// Entity missing the back-reference.
        inferior: EntityId,
    },
    /// A superior back-reference has no reciprocal inferior entry.
    #[error("reciprocity violation: superior link {inferior}->{superior} has no inferior mirror")]
    MissingInferiorMirror {
        /// Entity missing the forward link.
        superior: EntityId,
        /// Holder of the one-sided back-reference.
        inferior: EntityId,
    },
}
