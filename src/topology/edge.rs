//! Edge endpoint bookkeeping.
//!
//! An edge caches its two endpoint vertices in explicit `v1`/`v2` slots for
//! convenience; the authoritative vertex sequence lives in its zero-chain
//! inferior, and [`Network::set_vertices_from_zero_chains`] is the single
//! reconciliation step copying first/last back into the cache. The direction
//! of an edge is the vector from `v1` to `v2`; a ray has only `v1` set.
//!
//! The endpoint-slot setters never edit the zero-chain's vertex sequence;
//! [`Network::add_vertex`] and [`Network::remove_vertex`] edit the chain and
//! reconcile in one call. Callers mutating the chain through the raw link API
//! keep both in sync themselves; `validate_network` reports divergence as a
//! lint-level warning.

use crate::geometry::CurveGeometry;
use crate::net_error::BrepNetError;
use crate::topology::entity::Payload;
use crate::topology::kind::EntityKind;
use crate::topology::network::Network;
use crate::topology::point::EntityId;

/// Lifecycle state of an edge's endpoint cache.
///
/// Transitions only ever add endpoints: `Empty` → `Ray` → `Bounded`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeState {
    /// Freshly constructed, both endpoints unset; not yet a valid edge.
    Empty,
    /// Open edge, only one endpoint set.
    Ray,
    /// Both endpoints set.
    Bounded,
}

impl<C: CurveGeometry> Network<C> {
    /// The cached `(v1, v2)` endpoint slots of `edge`.
    pub fn endpoints(
        &self,
        edge: EntityId,
    ) -> Result<(Option<EntityId>, Option<EntityId>), BrepNetError> {
        let (v1, v2, _) = self.edge_parts(edge)?;
        Ok((v1, v2))
    }

    /// Empty, Ray or Bounded.
    pub fn edge_state(&self, edge: EntityId) -> Result<EdgeState, BrepNetError> {
        Ok(match self.endpoints(edge)? {
            (None, None) => EdgeState::Empty,
            (Some(_), Some(_)) => EdgeState::Bounded,
            _ => EdgeState::Ray,
        })
    }

    /// Sets the first endpoint slot and bumps the modification stamp. The
    /// zero-chain's vertex sequence is deliberately left alone.
    pub fn set_v1(&mut self, edge: EntityId, v: EntityId) -> Result<(), BrepNetError> {
        self.set_endpoint_slot(edge, v, true)
    }

    /// Sets the second endpoint slot; see [`Network::set_v1`].
    pub fn set_v2(&mut self, edge: EntityId, v: EntityId) -> Result<(), BrepNetError> {
        self.set_endpoint_slot(edge, v, false)
    }

    fn set_endpoint_slot(
        &mut self,
        edge: EntityId,
        v: EntityId,
        first: bool,
    ) -> Result<(), BrepNetError> {
        if self.kind(v)? != EntityKind::Vertex {
            return Err(BrepNetError::InvalidArgument("endpoint must be a vertex"));
        }
        {
            let (v1, v2, _) = self.edge_parts_mut(edge)?;
            if first {
                *v1 = Some(v);
            } else {
                *v2 = Some(v);
            }
        }
        self.touch(edge);
        Ok(())
    }

    /// Attaches (or replaces) the curve payload of `edge`.
    pub fn set_curve(&mut self, edge: EntityId, curve: C) -> Result<(), BrepNetError> {
        {
            let (_, _, slot) = self.edge_parts_mut(edge)?;
            *slot = Some(curve);
        }
        self.touch(edge);
        Ok(())
    }

    /// The curve payload of `edge`, if any.
    pub fn curve(&self, edge: EntityId) -> Result<Option<&C>, BrepNetError> {
        match &self.entity(edge)?.payload {
            Payload::Edge { curve, .. } => Ok(curve.as_ref()),
            _ => Err(BrepNetError::InvalidArgument("entity is not an edge")),
        }
    }

    /// Recomputes `v1`/`v2` from the first and last vertex of the edge's
    /// first non-empty zero-chain. This is the reconciliation step to invoke
    /// after any structural edit of the zero-chain; with no non-empty chain
    /// it is a no-op (endpoints never transition back to unset).
    pub fn set_vertices_from_zero_chains(&mut self, edge: EntityId) -> Result<(), BrepNetError> {
        let chains: Vec<EntityId> = {
            let ent = self.entity(edge)?;
            if !matches!(ent.payload, Payload::Edge { .. }) {
                return Err(BrepNetError::InvalidArgument("entity is not an edge"));
            }
            ent.inferiors.clone()
        };
        let mut ends = None;
        for chain in chains {
            let verts = self.inferiors(chain)?;
            if let (Some(&first), Some(&last)) = (verts.first(), verts.last()) {
                ends = Some((first, last));
                break;
            }
        }
        let Some((first, last)) = ends else {
            return Ok(());
        };
        {
            let (v1, v2, _) = self.edge_parts_mut(edge)?;
            *v1 = Some(first);
            *v2 = Some(last);
        }
        self.touch(edge);
        Ok(())
    }

    /// Links `v` into the edge's zero-chain (appended last, created on
    /// demand if the edge has none) and re-runs the reconciliation step, as
    /// one call.
    pub fn add_vertex(&mut self, edge: EntityId, v: EntityId) -> Result<(), BrepNetError> {
        let chain = {
            let ent = self.entity(edge)?;
            if !matches!(ent.payload, Payload::Edge { .. }) {
                return Err(BrepNetError::InvalidArgument("entity is not an edge"));
            }
            ent.inferiors.first().copied()
        };
        let chain = match chain {
            Some(chain) => chain,
            None => {
                let chain = self.new_zero_chain(&[])?;
                self.link_unchecked(edge, chain);
                // Hand the chain's creation pin over to the edge's owning link.
                self.entity_mut(chain)?.pins = 0;
                chain
            }
        };
        self.link_inferior(chain, v)?;
        self.set_vertices_from_zero_chains(edge)
    }

    /// Unlinks `v` from the edge's zero-chain listing it and re-runs the
    /// reconciliation step.
    ///
    /// Fails with [`BrepNetError::NotLinked`] when no chain of the edge
    /// lists `v`.
    pub fn remove_vertex(&mut self, edge: EntityId, v: EntityId) -> Result<(), BrepNetError> {
        let chains: Vec<EntityId> = {
            let ent = self.entity(edge)?;
            if !matches!(ent.payload, Payload::Edge { .. }) {
                return Err(BrepNetError::InvalidArgument("entity is not an edge"));
            }
            ent.inferiors.clone()
        };
        for &chain in &chains {
            if self.inferiors(chain)?.contains(&v) {
                self.unlink_inferior(chain, v)?;
                return self.set_vertices_from_zero_chains(edge);
            }
        }
        Err(BrepNetError::NotLinked {
            superior: chains.first().copied().unwrap_or(edge),
            inferior: v,
        })
    }

    /// Rebinds the endpoint slot currently holding `old` (identity compare)
    /// to `new`, leaving the other slot untouched.
    ///
    /// Fails with [`BrepNetError::NotAnEndpoint`], changing nothing, when
    /// `old` is in neither slot.
    pub fn replace_end_point(
        &mut self,
        edge: EntityId,
        old: EntityId,
        new: EntityId,
    ) -> Result<(), BrepNetError> {
        if self.kind(new)? != EntityKind::Vertex {
            return Err(BrepNetError::InvalidArgument("endpoint must be a vertex"));
        }
        {
            let (v1, v2, _) = self.edge_parts_mut(edge)?;
            if *v1 == Some(old) {
                *v1 = Some(new);
            } else if *v2 == Some(old) {
                *v2 = Some(new);
            } else {
                return Err(BrepNetError::NotAnEndpoint { edge, vertex: old });
            }
        }
        self.touch(edge);
        Ok(())
    }

    /// Enrolls `edge` in the one-chain `chain`, with the same reciprocity
    /// guarantee as [`Network::link_inferior`].
    pub fn add_edge_loop(&mut self, edge: EntityId, chain: EntityId) -> Result<(), BrepNetError> {
        self.link_inferior(chain, edge)
    }

    /// Removes `edge` from the one-chain `chain`.
    pub fn remove_edge_loop(
        &mut self,
        edge: EntityId,
        chain: EntityId,
    ) -> Result<(), BrepNetError> {
        self.unlink_inferior(chain, edge)
    }

    /// `true` iff the endpoint sets of the two edges intersect (identity or
    /// positional vertex equality). Symmetric by construction.
    pub fn share_vertex_with(&self, a: EntityId, b: EntityId) -> Result<bool, BrepNetError> {
        let (a1, a2, _) = self.edge_parts(a)?;
        let (b1, b2, _) = self.edge_parts(b)?;
        for pa in [a1, a2].into_iter().flatten() {
            for pb in [b1, b2].into_iter().flatten() {
                if self.vertices_equal(pa, pb) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Value equality of two edges: same-order endpoint equality plus
    /// [`CurveGeometry::compare_geometry`] on the curve payloads (both absent
    /// compares equal, mixed presence does not). Identity equality is just
    /// `a == b` on the ids.
    pub fn edges_equal(&self, a: EntityId, b: EntityId) -> Result<bool, BrepNetError> {
        let (a1, a2, ac) = self.edge_parts(a)?;
        let (b1, b2, bc) = self.edge_parts(b)?;
        if a == b {
            return Ok(true);
        }
        let slot_eq = |x: Option<EntityId>, y: Option<EntityId>| match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => self.vertices_equal(x, y),
            _ => false,
        };
        if !slot_eq(a1, b1) || !slot_eq(a2, b2) {
            return Ok(false);
        }
        Ok(match (ac, bc) {
            (None, None) => true,
            (Some(x), Some(y)) => x.compare_geometry(y),
            _ => false,
        })
    }

    fn edge_parts(
        &self,
        id: EntityId,
    ) -> Result<(Option<EntityId>, Option<EntityId>, Option<&C>), BrepNetError> {
        match &self.entity(id)?.payload {
            Payload::Edge { v1, v2, curve } => Ok((*v1, *v2, curve.as_ref())),
            _ => Err(BrepNetError::InvalidArgument("entity is not an edge")),
        }
    }

    fn edge_parts_mut(
        &mut self,
        id: EntityId,
    ) -> Result<
        (
            &mut Option<EntityId>,
            &mut Option<EntityId>,
            &mut Option<C>,
        ),
        BrepNetError,
    > {
        match &mut self.entity_mut(id)?.payload {
            Payload::Edge { v1, v2, curve } => Ok((v1, v2, curve)),
            _ => Err(BrepNetError::InvalidArgument("entity is not an edge")),
        }
    }
}
