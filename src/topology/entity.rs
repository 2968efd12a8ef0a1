//! The per-entity record stored in the network arena.

use crate::geometry::Point3;
use crate::topology::cache::ClosureCache;
use crate::topology::kind::EntityKind;
use crate::topology::point::EntityId;
use std::collections::HashMap;

/// Kind-specific payload. Chains, faces and blocks carry none; their state is
/// entirely their link tables.
#[derive(Clone, Debug)]
pub(crate) enum Payload<C> {
    Vertex {
        position: Point3,
    },
    Edge {
        /// First endpoint cache. An explicit cache, not derived per query;
        /// `set_vertices_from_zero_chains` reconciles it with the zero-chain.
        v1: Option<EntityId>,
        /// Second endpoint cache. Unset on a ray.
        v2: Option<EntityId>,
        curve: Option<C>,
    },
    Plain,
}

/// One entity in the arena: rank tag, mirrored link tables, lifetime
/// counters, modification stamp and memoized closures.
#[derive(Clone, Debug)]
pub(crate) struct Entity<C> {
    pub(crate) kind: EntityKind,
    /// Owning links to the composing entities, in insertion order. Mirrored
    /// by the target's `superiors` at all externally observable times.
    pub(crate) inferiors: Vec<EntityId>,
    /// Non-owning back-references used for invalidation and upward walks.
    pub(crate) superiors: Vec<EntityId>,
    /// External handles. An entity stays alive while `pins > 0` or some
    /// superior still owns it.
    pub(crate) pins: usize,
    /// Monotonically increasing modification stamp (shared network clock).
    pub(crate) stamp: u64,
    pub(crate) payload: Payload<C>,
    /// Memoized downward closures, one per requested kind.
    pub(crate) closures: HashMap<EntityKind, ClosureCache>,
}

impl<C> Entity<C> {
    pub(crate) fn new(kind: EntityKind, payload: Payload<C>, pins: usize, stamp: u64) -> Self {
        Entity {
            kind,
            inferiors: Vec::new(),
            superiors: Vec::new(),
            pins,
            stamp,
            payload,
            closures: HashMap::new(),
        }
    }

    /// `true` once nothing owns the entity any more.
    #[inline]
    pub(crate) fn is_unowned(&self) -> bool {
        self.pins == 0 && self.superiors.is_empty()
    }
}
