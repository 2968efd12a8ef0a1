//! The arena holding every topological entity and its reciprocal links.
//!
//! `Network` is the single owner of all entities. Inferior/superior relations
//! are stored as mirrored id vectors on both endpoints, so reciprocity (R1)
//! is a structural property maintained by every mutation, and type validity
//! (R2) is checked before any state changes. Failed operations leave the
//! network untouched.
//!
//! # Ownership and teardown
//! Inferior links own: an entity stays alive while it is pinned (external
//! handles) or while at least one superior lists it as inferior. Unpinning or
//! unlinking the last owner collects the entity, which first unlinks its own
//! remaining inferiors, cascading to anything that thereby becomes unowned,
//! so no live entity is ever left holding a dangling reciprocal reference.

use crate::geometry::{CurveGeometry, Point3};
use crate::net_error::BrepNetError;
use crate::topology::cache::InvalidateCache;
use crate::topology::edge::EdgeState;
use crate::topology::entity::{Entity, Payload};
use crate::topology::kind::EntityKind;
use crate::topology::point::EntityId;
use std::collections::HashMap;

/// In-memory boundary-representation topology network.
///
/// # Type Parameters
/// - `C`: the curve payload attached to edges; defaults to `()` for purely
///   combinatorial networks. See [`CurveGeometry`].
#[derive(Clone, Debug)]
pub struct Network<C = ()> {
    pub(crate) entities: HashMap<EntityId, Entity<C>>,
    /// Id source; ids are handed out once and never reused.
    next_id: u64,
    /// Shared modification clock behind every entity stamp.
    clock: u64,
}

impl<C> Default for Network<C> {
    fn default() -> Self {
        Network {
            entities: HashMap::new(),
            next_id: 0,
            clock: 0,
        }
    }
}

impl<C: CurveGeometry> Network<C> {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    // --- construction -----------------------------------------------------

    /// Creates a pinned vertex at `position`.
    pub fn new_vertex(&mut self, position: Point3) -> EntityId {
        self.alloc(EntityKind::Vertex, Payload::Vertex { position }, 1)
    }

    /// Creates a pinned zero-chain over `vertices`, in order.
    pub fn new_zero_chain(&mut self, vertices: &[EntityId]) -> Result<EntityId, BrepNetError> {
        self.alloc_with_inferiors(EntityKind::ZeroChain, vertices)
    }

    /// Creates a pinned edge in the `Empty` state, already owning one empty
    /// zero-chain.
    pub fn new_edge(&mut self) -> EntityId {
        let edge = self.alloc(
            EntityKind::Edge,
            Payload::Edge {
                v1: None,
                v2: None,
                curve: None,
            },
            1,
        );
        // The chain is owned by the edge alone; it dies with it.
        let chain = self.alloc(EntityKind::ZeroChain, Payload::Plain, 0);
        self.link_unchecked(edge, chain);
        edge
    }

    /// Creates a pinned edge bounded by `v1` and `v2`, with its zero-chain
    /// built to match and both endpoint slots filled. A self-loop (`v1 ==
    /// v2`) yields a singleton zero-chain.
    pub fn new_edge_between(
        &mut self,
        v1: EntityId,
        v2: EntityId,
        curve: Option<C>,
    ) -> Result<EntityId, BrepNetError> {
        for v in [v1, v2] {
            if self.kind(v)? != EntityKind::Vertex {
                return Err(BrepNetError::InvalidArgument("endpoint must be a vertex"));
            }
        }
        let verts: &[EntityId] = if v1 == v2 { &[v1] } else { &[v1, v2] };
        let chain = self.alloc_with_inferiors(EntityKind::ZeroChain, verts)?;
        let edge = self.alloc(
            EntityKind::Edge,
            Payload::Edge {
                v1: Some(v1),
                v2: Some(v2),
                curve,
            },
            1,
        );
        self.link_unchecked(edge, chain);
        // Hand the chain's creation pin over to the edge's owning link.
        self.entity_mut(chain)?.pins = 0;
        Ok(edge)
    }

    /// Creates a pinned one-chain over `edges`, in loop order.
    pub fn new_one_chain(&mut self, edges: &[EntityId]) -> Result<EntityId, BrepNetError> {
        self.alloc_with_inferiors(EntityKind::OneChain, edges)
    }

    /// Creates a pinned face bounded by `one_chains` (outer boundary first
    /// by convention; the network does not interpret the order).
    pub fn new_face(&mut self, one_chains: &[EntityId]) -> Result<EntityId, BrepNetError> {
        self.alloc_with_inferiors(EntityKind::Face, one_chains)
    }

    /// Creates a pinned two-chain (shell) over `faces`.
    pub fn new_two_chain(&mut self, faces: &[EntityId]) -> Result<EntityId, BrepNetError> {
        self.alloc_with_inferiors(EntityKind::TwoChain, faces)
    }

    /// Creates a pinned block bounded by `two_chains`.
    pub fn new_block(&mut self, two_chains: &[EntityId]) -> Result<EntityId, BrepNetError> {
        self.alloc_with_inferiors(EntityKind::Block, two_chains)
    }

    // --- linking ----------------------------------------------------------

    /// Links `inferior` into `superior`'s inferior table (appended last) and
    /// mirrors the back-reference, then invalidates caches upward from
    /// `superior`.
    ///
    /// Fails with [`BrepNetError::TypeMismatch`] unless the kinds are rank
    /// adjacent, and rejects a duplicate of an existing link.
    pub fn link_inferior(
        &mut self,
        superior: EntityId,
        inferior: EntityId,
    ) -> Result<(), BrepNetError> {
        let sk = self.kind(superior)?;
        let ik = self.kind(inferior)?;
        if sk.inferior_kind() != Some(ik) {
            return Err(BrepNetError::TypeMismatch {
                superior: sk,
                inferior: ik,
            });
        }
        if self.entity(superior)?.inferiors.contains(&inferior) {
            return Err(BrepNetError::InvalidArgument("inferior already linked"));
        }
        self.link_unchecked(superior, inferior);
        Ok(())
    }

    /// Removes both directions of an existing link and invalidates caches
    /// upward from `superior`. If the drop left `inferior` unowned, it is
    /// collected (cascading).
    ///
    /// No replacement inferior is installed here: a caller keeping `superior`
    /// valid must link a new one, and the gap between unlink and re-link must
    /// not be exposed through any query.
    pub fn unlink_inferior(
        &mut self,
        superior: EntityId,
        inferior: EntityId,
    ) -> Result<(), BrepNetError> {
        self.kind(inferior)?;
        let sup = self.entity_mut(superior)?;
        let Some(pos) = sup.inferiors.iter().position(|&x| x == inferior) else {
            return Err(BrepNetError::NotLinked { superior, inferior });
        };
        sup.inferiors.remove(pos);
        self.entity_mut(inferior)?.superiors.retain(|&x| x != superior);
        self.touch(superior);
        log::trace!("unlink {superior} -/-> {inferior}");
        self.collect_if_unowned(inferior);
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        self.debug_assert_reciprocal();
        Ok(())
    }

    // --- lifetime ---------------------------------------------------------

    /// Adds an external handle keeping `id` alive.
    pub fn pin(&mut self, id: EntityId) -> Result<(), BrepNetError> {
        self.entity_mut(id)?.pins += 1;
        Ok(())
    }

    /// Drops one external handle. When the last pin goes and no superior owns
    /// the entity, it is collected together with anything it solely owned.
    pub fn release(&mut self, id: EntityId) -> Result<(), BrepNetError> {
        let ent = self.entity_mut(id)?;
        if ent.pins == 0 {
            return Err(BrepNetError::InvalidArgument("entity has no pin to release"));
        }
        ent.pins -= 1;
        self.collect_if_unowned(id);
        Ok(())
    }

    /// Forcibly removes `id`: unlinks it from every remaining superior (each
    /// loses one inferior and is invalidated), drops all pins, then collects
    /// it, cascading through solely-owned inferiors.
    pub fn destroy(&mut self, id: EntityId) -> Result<(), BrepNetError> {
        let sups: Vec<EntityId> = self.entity(id)?.superiors.clone();
        for sup in sups {
            if let Some(se) = self.entities.get_mut(&sup) {
                se.inferiors.retain(|&x| x != id);
            }
            self.touch(sup);
        }
        let ent = self.entity_mut(id)?;
        ent.superiors.clear();
        ent.pins = 0;
        self.collect_if_unowned(id);
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        self.debug_assert_reciprocal();
        Ok(())
    }

    // --- queries ----------------------------------------------------------

    /// `true` while `id` refers to a live entity.
    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterator over all live entity ids, unordered.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Kind tag of `id`.
    pub fn kind(&self, id: EntityId) -> Result<EntityKind, BrepNetError> {
        Ok(self.entity(id)?.kind)
    }

    /// Current modification stamp of `id`.
    pub fn stamp(&self, id: EntityId) -> Result<u64, BrepNetError> {
        Ok(self.entity(id)?.stamp)
    }

    /// The inferior table of `id`, in link order.
    pub fn inferiors(&self, id: EntityId) -> Result<&[EntityId], BrepNetError> {
        Ok(&self.entity(id)?.inferiors)
    }

    /// The superior back-references of `id`, in link order.
    pub fn superiors(&self, id: EntityId) -> Result<&[EntityId], BrepNetError> {
        Ok(&self.entity(id)?.superiors)
    }

    /// Safe "as-kind" query: a typed vertex view, or `None` when `id` is
    /// unknown or not a vertex.
    pub fn as_vertex(&self, id: EntityId) -> Option<VertexView> {
        match self.entities.get(&id)?.payload {
            Payload::Vertex { position } => Some(VertexView { id, position }),
            _ => None,
        }
    }

    /// Safe "as-kind" query: a typed edge view, or `None` when `id` is
    /// unknown or not an edge.
    pub fn as_edge(&self, id: EntityId) -> Option<EdgeView<'_, C>> {
        match self.entities.get(&id)?.payload {
            Payload::Edge { v1, v2, .. } => Some(EdgeView {
                net: self,
                id,
                v1,
                v2,
            }),
            _ => None,
        }
    }

    /// Uniform safe "as-kind" query: `Some(id)` iff `id` is live and of
    /// `kind`, `None` otherwise.
    ///
    /// Works for every kind; the payload-carrying kinds additionally have the
    /// richer [`Network::as_vertex`] and [`Network::as_edge`] views.
    pub fn as_kind(&self, id: EntityId, kind: EntityKind) -> Option<EntityId> {
        (self.entities.get(&id)?.kind == kind).then_some(id)
    }

    /// Value equality of vertices: same entity, or equal positions.
    pub fn vertices_equal(&self, a: EntityId, b: EntityId) -> bool {
        if a == b {
            return true;
        }
        match (self.as_vertex(a), self.as_vertex(b)) {
            (Some(va), Some(vb)) => va.position == vb.position,
            _ => false,
        }
    }

    // --- internals --------------------------------------------------------

    pub(crate) fn entity(&self, id: EntityId) -> Result<&Entity<C>, BrepNetError> {
        self.entities.get(&id).ok_or(BrepNetError::UnknownEntity(id))
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity<C>, BrepNetError> {
        self.entities
            .get_mut(&id)
            .ok_or(BrepNetError::UnknownEntity(id))
    }

    fn alloc(&mut self, kind: EntityKind, payload: Payload<C>, pins: usize) -> EntityId {
        self.next_id += 1;
        self.clock += 1;
        // Ids start at 1, so the nonzero constructor cannot fail here.
        let id = EntityId::new(self.next_id).expect("entity ids start at 1");
        self.entities
            .insert(id, Entity::new(kind, payload, pins, self.clock));
        log::trace!("alloc {kind} {id}");
        id
    }

    /// Validates `inferiors` against `kind`, then creates the entity and
    /// links them in order. Validation happens up front so a failure creates
    /// nothing.
    fn alloc_with_inferiors(
        &mut self,
        kind: EntityKind,
        inferiors: &[EntityId],
    ) -> Result<EntityId, BrepNetError> {
        let want = kind.inferior_kind();
        for (i, &inf) in inferiors.iter().enumerate() {
            let ik = self.kind(inf)?;
            if Some(ik) != want {
                return Err(BrepNetError::TypeMismatch {
                    superior: kind,
                    inferior: ik,
                });
            }
            if inferiors[..i].contains(&inf) {
                return Err(BrepNetError::InvalidArgument("duplicate inferior"));
            }
        }
        let id = self.alloc(kind, Payload::Plain, 1);
        for &inf in inferiors {
            self.link_unchecked(id, inf);
        }
        Ok(id)
    }

    /// Installs both halves of a pre-validated link and invalidates upward.
    pub(crate) fn link_unchecked(&mut self, superior: EntityId, inferior: EntityId) {
        if let Some(sup) = self.entities.get_mut(&superior) {
            sup.inferiors.push(inferior);
        }
        if let Some(inf) = self.entities.get_mut(&inferior) {
            inf.superiors.push(superior);
        }
        self.touch(superior);
        log::trace!("link {superior} -> {inferior}");
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        self.debug_assert_reciprocal();
    }

    /// Advances the shared clock and stamps `id` plus every transitive
    /// superior, so their downward closure caches go stale.
    pub(crate) fn touch(&mut self, id: EntityId) {
        self.clock += 1;
        let stamp = self.clock;
        let mut seen: hashbrown::HashSet<EntityId> = hashbrown::HashSet::new();
        seen.insert(id);
        let mut stack = vec![id];
        while let Some(p) = stack.pop() {
            let Some(ent) = self.entities.get_mut(&p) else {
                continue;
            };
            ent.stamp = stamp;
            for i in 0..ent.superiors.len() {
                let s = ent.superiors[i];
                if seen.insert(s) {
                    stack.push(s);
                }
            }
        }
    }

    /// Collects `id` if nothing owns it any more: unlinks each inferior
    /// (preserving reciprocity before deallocation) and cascades into
    /// inferiors that thereby become unowned.
    fn collect_if_unowned(&mut self, id: EntityId) {
        let unowned = self.entities.get(&id).is_some_and(Entity::is_unowned);
        if !unowned {
            return;
        }
        log::debug!("collect {id}");
        let infs = match self.entities.get_mut(&id) {
            Some(ent) => std::mem::take(&mut ent.inferiors),
            None => return,
        };
        for inf in infs {
            if let Some(ie) = self.entities.get_mut(&inf) {
                ie.superiors.retain(|&s| s != id);
            }
            self.collect_if_unowned(inf);
        }
        self.entities.remove(&id);
    }

    #[cfg(any(
        debug_assertions,
        feature = "strict-invariants",
        feature = "check-invariants"
    ))]
    pub(crate) fn debug_assert_reciprocal(&self) {
        for (&id, ent) in &self.entities {
            for inf in &ent.inferiors {
                let ok = self
                    .entities
                    .get(inf)
                    .is_some_and(|ie| ie.superiors.contains(&id));
                assert!(ok, "missing superior mirror for link {id} -> {inf}");
            }
            for sup in &ent.superiors {
                let ok = self
                    .entities
                    .get(sup)
                    .is_some_and(|se| se.inferiors.contains(&id));
                assert!(ok, "missing inferior mirror for back-ref {id} -> {sup}");
            }
        }
    }
}

impl<C> InvalidateCache for Network<C> {
    fn invalidate_cache(&mut self) {
        self.clock += 1;
        for ent in self.entities.values_mut() {
            ent.closures.clear();
        }
    }
}

/// Typed read-only view of a vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexView {
    pub id: EntityId,
    pub position: Point3,
}

/// Typed read-only view of an edge, snapshotting the endpoint cache.
pub struct EdgeView<'a, C> {
    net: &'a Network<C>,
    id: EntityId,
    v1: Option<EntityId>,
    v2: Option<EntityId>,
}

impl<C> Clone for EdgeView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for EdgeView<'_, C> {}

impl<'a, C: CurveGeometry> EdgeView<'a, C> {
    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// First endpoint, if set. The direction of the edge is v1 → v2.
    #[inline]
    pub fn v1(&self) -> Option<EntityId> {
        self.v1
    }

    /// Second endpoint, if set.
    #[inline]
    pub fn v2(&self) -> Option<EntityId> {
        self.v2
    }

    /// Empty, Ray or Bounded, from the endpoint cache.
    pub fn state(&self) -> EdgeState {
        match (self.v1, self.v2) {
            (None, None) => EdgeState::Empty,
            (Some(_), None) | (None, Some(_)) => EdgeState::Ray,
            (Some(_), Some(_)) => EdgeState::Bounded,
        }
    }

    /// The edge's zero-chain inferior. Exactly one exists at any externally
    /// observable moment.
    pub fn zero_chain(&self) -> Option<EntityId> {
        self.net
            .entities
            .get(&self.id)
            .and_then(|e| e.inferiors.first().copied())
    }

    /// The one-chains (loops) this edge participates in.
    pub fn edge_loops(&self) -> &'a [EntityId] {
        self.net
            .entities
            .get(&self.id)
            .map(|e| e.superiors.as_slice())
            .unwrap_or(&[])
    }

    /// `true` iff `v` equals the first endpoint (identity or position).
    pub fn is_endpoint1(&self, v: EntityId) -> bool {
        self.v1.is_some_and(|v1| self.net.vertices_equal(v1, v))
    }

    /// `true` iff `v` equals the second endpoint (identity or position).
    pub fn is_endpoint2(&self, v: EntityId) -> bool {
        self.v2.is_some_and(|v2| self.net.vertices_equal(v2, v))
    }

    /// `true` iff `v` equals either endpoint.
    pub fn is_endpoint(&self, v: EntityId) -> bool {
        self.is_endpoint1(v) || self.is_endpoint2(v)
    }

    /// The endpoint opposite `v`, or `None` when `v` matches the only set
    /// endpoint of a ray.
    ///
    /// Fails with [`BrepNetError::NotAnEndpoint`] if `v` matches neither
    /// endpoint.
    pub fn other_endpoint(&self, v: EntityId) -> Result<Option<EntityId>, BrepNetError> {
        if self.is_endpoint1(v) {
            Ok(self.v2)
        } else if self.is_endpoint2(v) {
            Ok(self.v1)
        } else {
            Err(BrepNetError::NotAnEndpoint {
                edge: self.id,
                vertex: v,
            })
        }
    }
}
