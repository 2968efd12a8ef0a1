//! Whole-network topology audits.
//!
//! [`validate_network`] checks the two structural invariants over every live
//! entity: reciprocity (each link mirrored in both directions) and type
//! validity (links only between adjacent ranks). Endpoint caches that have
//! drifted from their zero-chain are a caller-contract matter, reported as a
//! lint-level warning rather than an error.

use crate::debug_invariants::DebugInvariants;
use crate::geometry::CurveGeometry;
use crate::net_error::BrepNetError;
use crate::topology::kind::EntityKind;
use crate::topology::network::Network;

/// Audit reciprocity and type validity across the whole network, returning
/// the first violation found.
pub fn validate_network<C: CurveGeometry>(net: &Network<C>) -> Result<(), BrepNetError> {
    for id in net.entities() {
        let kind = net.kind(id)?;
        for &inf in net.inferiors(id)? {
            let ik = net
                .kind(inf)
                .map_err(|_| BrepNetError::MissingSuperiorMirror {
                    superior: id,
                    inferior: inf,
                })?;
            if kind.inferior_kind() != Some(ik) {
                return Err(BrepNetError::TypeMismatch {
                    superior: kind,
                    inferior: ik,
                });
            }
            if !net.superiors(inf)?.contains(&id) {
                return Err(BrepNetError::MissingSuperiorMirror {
                    superior: id,
                    inferior: inf,
                });
            }
        }
        for &sup in net.superiors(id)? {
            let ok = net
                .inferiors(sup)
                .map(|infs| infs.contains(&id))
                .unwrap_or(false);
            if !ok {
                return Err(BrepNetError::MissingInferiorMirror {
                    superior: sup,
                    inferior: id,
                });
            }
        }
        if kind == EntityKind::Edge {
            lint_endpoint_cache(net, id)?;
        }
    }
    Ok(())
}

/// Warn when an edge's cached endpoints disagree with its zero-chain's
/// first/last vertex. The reconciliation step is the caller's responsibility
/// (`set_vertices_from_zero_chains`), so this never fails the audit.
fn lint_endpoint_cache<C: CurveGeometry>(
    net: &Network<C>,
    edge: crate::topology::point::EntityId,
) -> Result<(), BrepNetError> {
    let (v1, v2) = net.endpoints(edge)?;
    for &chain in net.inferiors(edge)? {
        let verts = net.inferiors(chain)?;
        let (Some(&first), Some(&last)) = (verts.first(), verts.last()) else {
            continue;
        };
        let v1_ok = v1.is_none_or(|v| net.vertices_equal(v, first));
        let v2_ok = v2.is_none_or(|v| net.vertices_equal(v, last));
        if !v1_ok || !v2_ok {
            log::warn!(
                "edge {edge}: endpoint cache diverges from zero-chain {chain} \
                 (call set_vertices_from_zero_chains after editing the chain)"
            );
        }
        break;
    }
    Ok(())
}

impl<C: CurveGeometry> DebugInvariants for Network<C> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "topology network");
    }

    fn validate_invariants(&self) -> Result<(), BrepNetError> {
        validate_network(self)
    }
}
