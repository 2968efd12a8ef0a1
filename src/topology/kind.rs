//! Entity kind tags for the topological hierarchy.
//!
//! The closed set of kinds replaces per-type unchecked downcasts: adding a
//! topological dimension means adding one variant here, and the safe
//! "as-kind" queries on the network return `None` for a mismatch instead of
//! exhibiting undefined behavior.

use std::fmt;

/// The closed set of topological entity kinds, ordered by rank.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum EntityKind {
    /// 0D point entity.
    Vertex,
    /// Ordered vertex sequence bounding one edge.
    ZeroChain,
    /// 1D entity with cached endpoint slots.
    Edge,
    /// Ordered edge sequence forming a loop, inferior of a face.
    OneChain,
    /// 2D entity bounded by one-chains.
    Face,
    /// Face collection (shell), inferior of a block.
    TwoChain,
    /// 3D entity, top of the hierarchy.
    Block,
}

impl EntityKind {
    /// All kinds, rank order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Vertex,
        EntityKind::ZeroChain,
        EntityKind::Edge,
        EntityKind::OneChain,
        EntityKind::Face,
        EntityKind::TwoChain,
        EntityKind::Block,
    ];

    /// Position in the hierarchy; links are only valid between adjacent ranks.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            EntityKind::Vertex => 0,
            EntityKind::ZeroChain => 1,
            EntityKind::Edge => 2,
            EntityKind::OneChain => 3,
            EntityKind::Face => 4,
            EntityKind::TwoChain => 5,
            EntityKind::Block => 6,
        }
    }

    /// Topological dimension of the point set the entity describes.
    pub fn dimension(self) -> u8 {
        match self {
            EntityKind::Vertex | EntityKind::ZeroChain => 0,
            EntityKind::Edge | EntityKind::OneChain => 1,
            EntityKind::Face | EntityKind::TwoChain => 2,
            EntityKind::Block => 3,
        }
    }

    /// The single kind this entity accepts as inferior, if any.
    pub fn inferior_kind(self) -> Option<EntityKind> {
        match self {
            EntityKind::Vertex => None,
            EntityKind::ZeroChain => Some(EntityKind::Vertex),
            EntityKind::Edge => Some(EntityKind::ZeroChain),
            EntityKind::OneChain => Some(EntityKind::Edge),
            EntityKind::Face => Some(EntityKind::OneChain),
            EntityKind::TwoChain => Some(EntityKind::Face),
            EntityKind::Block => Some(EntityKind::TwoChain),
        }
    }

    /// The single kind this entity accepts as superior, if any.
    pub fn superior_kind(self) -> Option<EntityKind> {
        match self {
            EntityKind::Vertex => Some(EntityKind::ZeroChain),
            EntityKind::ZeroChain => Some(EntityKind::Edge),
            EntityKind::Edge => Some(EntityKind::OneChain),
            EntityKind::OneChain => Some(EntityKind::Face),
            EntityKind::Face => Some(EntityKind::TwoChain),
            EntityKind::TwoChain => Some(EntityKind::Block),
            EntityKind::Block => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Vertex => "vertex",
            EntityKind::ZeroChain => "zero-chain",
            EntityKind::Edge => "edge",
            EntityKind::OneChain => "one-chain",
            EntityKind::Face => "face",
            EntityKind::TwoChain => "two-chain",
            EntityKind::Block => "block",
        };
        f.write_str(name)
    }
}
