//! Closure computation over the link graph.
//!
//! `compute_<kind>` returns the de-duplicated list of all entities of one
//! kind reachable from a starting entity: downward through inferior links for
//! kinds below the entity's rank, upward through superior back-references for
//! kinds above it. Downward results are memoized keyed to the entity's
//! modification stamp; since invalidation propagates upward only, upward
//! results are recomputed on every call instead of cached.

use crate::geometry::CurveGeometry;
use crate::net_error::BrepNetError;
use crate::topology::cache::ClosureCache;
use crate::topology::entity::Payload;
use crate::topology::kind::EntityKind;
use crate::topology::network::Network;
use crate::topology::point::EntityId;

impl<C: CurveGeometry> Network<C> {
    /// All reachable entities of `kind`, starting from `id`.
    ///
    /// Traversal is depth-first pre-order with insertion order following the
    /// link tables; each entity appears once. Asking for the entity's own
    /// kind yields `[id]`.
    pub fn closure_of(
        &mut self,
        id: EntityId,
        kind: EntityKind,
    ) -> Result<Vec<EntityId>, BrepNetError> {
        let ent = self.entity(id)?;
        let my_kind = ent.kind;
        if kind == my_kind {
            return Ok(vec![id]);
        }
        if kind.rank() > my_kind.rank() {
            return Ok(self.walk_up(id, kind));
        }
        let stamp = ent.stamp;
        if let Some(cache) = ent.closures.get(&kind) {
            if cache.is_fresh(stamp) {
                return Ok(cache.items.clone());
            }
        }
        let items = if my_kind == EntityKind::Edge && kind == EntityKind::Vertex {
            self.edge_vertex_closure(id)?
        } else {
            self.walk_down(id, kind)
        };
        self.entity_mut(id)?.closures.insert(
            kind,
            ClosureCache {
                stamp,
                items: items.clone(),
            },
        );
        Ok(items)
    }

    /// All vertices beneath `id`. For an edge this is O(1): the endpoint
    /// cache, collapsed to a singleton on a self-loop, without walking the
    /// zero-chain.
    pub fn compute_vertices(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::Vertex)
    }

    /// All zero-chains reachable from `id`.
    pub fn compute_zero_chains(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::ZeroChain)
    }

    /// All edges reachable from `id`.
    pub fn compute_edges(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::Edge)
    }

    /// All one-chains reachable from `id`.
    pub fn compute_one_chains(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::OneChain)
    }

    /// All faces reachable from `id`.
    pub fn compute_faces(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::Face)
    }

    /// All two-chains reachable from `id`.
    pub fn compute_two_chains(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::TwoChain)
    }

    /// All blocks reachable from `id`.
    pub fn compute_blocks(&mut self, id: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        self.closure_of(id, EntityKind::Block)
    }

    fn edge_vertex_closure(&self, edge: EntityId) -> Result<Vec<EntityId>, BrepNetError> {
        let Payload::Edge { v1, v2, .. } = self.entity(edge)?.payload else {
            return Err(BrepNetError::InvalidArgument("entity is not an edge"));
        };
        let mut out = Vec::with_capacity(2);
        for v in [v1, v2].into_iter().flatten() {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        Ok(out)
    }

    fn walk_down(&self, start: EntityId, want: EntityKind) -> Vec<EntityId> {
        self.walk(start, want, false)
    }

    fn walk_up(&self, start: EntityId, want: EntityKind) -> Vec<EntityId> {
        self.walk(start, want, true)
    }

    /// Shared DFS over one link direction. Ranks change strictly
    /// monotonically along links, so the walk terminates without cycle
    /// handling; the seen-set only collapses shared (non-tree) structure.
    fn walk(&self, start: EntityId, want: EntityKind, upward: bool) -> Vec<EntityId> {
        let mut out = Vec::new();
        let mut seen: hashbrown::HashSet<EntityId> = hashbrown::HashSet::new();
        seen.insert(start);
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            let Some(ent) = self.entities.get(&p) else {
                continue;
            };
            if ent.kind == want {
                out.push(p);
                // Nothing of the same kind lies further along this direction.
                continue;
            }
            let next = if upward { &ent.superiors } else { &ent.inferiors };
            // Reversed push keeps pop order equal to link-table order.
            for &q in next.iter().rev() {
                if seen.insert(q) {
                    stack.push(q);
                }
            }
        }
        out
    }
}
