//! Edge endpoint scenarios: states, reconciliation, replacement, equality.

use crate::geometry::{LineSegment, Point3};
use crate::net_error::BrepNetError;
use crate::topology::edge::EdgeState;
use crate::topology::network::Network;

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

#[test]
fn default_edge_is_empty_with_one_zero_chain() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    assert_eq!(net.edge_state(e).unwrap(), EdgeState::Empty);
    let infs = net.inferiors(e).unwrap();
    assert_eq!(infs.len(), 1);
    assert!(net.inferiors(infs[0]).unwrap().is_empty());
}

#[test]
fn states_advance_and_never_revert() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));

    net.set_v1(e, a).unwrap();
    assert_eq!(net.edge_state(e).unwrap(), EdgeState::Ray);
    net.set_v2(e, b).unwrap();
    assert_eq!(net.edge_state(e).unwrap(), EdgeState::Bounded);

    // Re-setting an endpoint replaces it; no path leads back to Ray/Empty.
    let c = net.new_vertex(p(2.0, 2.0));
    net.set_v1(e, c).unwrap();
    assert_eq!(net.edge_state(e).unwrap(), EdgeState::Bounded);
    assert_eq!(net.endpoints(e).unwrap(), (Some(c), Some(b)));
}

#[test]
fn setters_reject_non_vertices() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let other = net.new_edge();
    assert_eq!(
        net.set_v1(e, other),
        Err(BrepNetError::InvalidArgument("endpoint must be a vertex"))
    );
    assert_eq!(net.edge_state(e).unwrap(), EdgeState::Empty);
}

#[test]
fn set_vertices_from_zero_chains_syncs_cache() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let a = net.new_vertex(p(0.0, 0.0));
    let mid = net.new_vertex(p(0.5, 0.2));
    let b = net.new_vertex(p(1.0, 0.0));
    let zc = net.inferiors(e).unwrap()[0];
    for v in [a, mid, b] {
        net.link_inferior(zc, v).unwrap();
    }

    // The cache is stale until the reconciliation step runs.
    assert_eq!(net.endpoints(e).unwrap(), (None, None));
    net.set_vertices_from_zero_chains(e).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(b)));
}

#[test]
fn set_vertices_from_empty_chain_is_a_noop() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let a = net.new_vertex(p(3.0, 3.0));
    net.set_v1(e, a).unwrap();
    net.set_vertices_from_zero_chains(e).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), None));
}

#[test]
fn replace_end_point_rebinds_one_slot() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));
    let c = net.new_vertex(p(2.0, 0.0));
    let e = net.new_edge_between(a, b, None).unwrap();

    net.replace_end_point(e, a, c).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(c), Some(b)));

    net.replace_end_point(e, b, a).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(c), Some(a)));
}

#[test]
fn replace_end_point_of_non_endpoint_fails_unchanged() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));
    // Same position as `a`, but a different entity: identity compare must miss.
    let a_twin = net.new_vertex(p(0.0, 0.0));
    let c = net.new_vertex(p(9.0, 9.0));
    let e = net.new_edge_between(a, b, None).unwrap();
    let stamp = net.stamp(e).unwrap();

    assert_eq!(
        net.replace_end_point(e, a_twin, c),
        Err(BrepNetError::NotAnEndpoint {
            edge: e,
            vertex: a_twin,
        })
    );
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(b)));
    assert_eq!(net.stamp(e).unwrap(), stamp);
}

#[test]
fn endpoint_queries_use_value_equality() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));
    let e = net.new_edge_between(a, b, None).unwrap();
    // A distinct vertex at the same position counts as the same endpoint.
    let a_twin = net.new_vertex(p(0.0, 0.0));

    let view = net.as_edge(e).unwrap();
    assert!(view.is_endpoint1(a_twin));
    assert!(!view.is_endpoint2(a_twin));
    assert!(view.is_endpoint(a_twin));
    assert_eq!(view.other_endpoint(a_twin).unwrap(), Some(b));
    assert_eq!(view.other_endpoint(b).unwrap(), Some(a));

    let far = net.new_vertex(p(5.0, 5.0));
    let view = net.as_edge(e).unwrap();
    assert!(!view.is_endpoint(far));
    assert_eq!(
        view.other_endpoint(far),
        Err(BrepNetError::NotAnEndpoint { edge: e, vertex: far })
    );
}

#[test]
fn other_endpoint_of_a_ray_is_none() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let a = net.new_vertex(p(0.0, 0.0));
    net.set_v1(e, a).unwrap();

    let view = net.as_edge(e).unwrap();
    assert_eq!(view.other_endpoint(a).unwrap(), None);
}

#[test]
fn add_vertex_links_and_reconciles_in_one_call() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 0.0));

    net.add_vertex(e, a).unwrap();
    // Sole chain vertex: first and last coincide.
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(a)));
    net.add_vertex(e, b).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(b)));

    let zc = net.inferiors(e).unwrap()[0];
    assert_eq!(net.inferiors(zc).unwrap(), &[a, b]);
    assert_eq!(
        net.add_vertex(e, a),
        Err(BrepNetError::InvalidArgument("inferior already linked"))
    );
}

#[test]
fn add_vertex_recreates_a_missing_zero_chain() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    let zc0 = net.inferiors(e).unwrap()[0];
    net.unlink_inferior(e, zc0).unwrap();

    let a = net.new_vertex(p(2.0, 0.0));
    net.add_vertex(e, a).unwrap();
    let zc = net.inferiors(e).unwrap()[0];
    assert_eq!(net.inferiors(zc).unwrap(), &[a]);
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(a)));
}

#[test]
fn remove_vertex_unlinks_and_reconciles() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let mid = net.new_vertex(p(0.5, 0.2));
    let b = net.new_vertex(p(1.0, 0.0));
    let e = net.new_edge();
    for v in [a, mid, b] {
        net.add_vertex(e, v).unwrap();
    }
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(b)));

    net.remove_vertex(e, b).unwrap();
    assert_eq!(net.endpoints(e).unwrap(), (Some(a), Some(mid)));
    let zc = net.inferiors(e).unwrap()[0];
    assert_eq!(net.inferiors(zc).unwrap(), &[a, mid]);
    assert_eq!(
        net.remove_vertex(e, b),
        Err(BrepNetError::NotLinked {
            superior: zc,
            inferior: b,
        })
    );
}

#[test]
fn share_vertex_with_is_symmetric() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 0.0));
    let c = net.new_vertex(p(2.0, 0.0));
    let d = net.new_vertex(p(3.0, 0.0));
    let ab = net.new_edge_between(a, b, None).unwrap();
    let bc = net.new_edge_between(b, c, None).unwrap();
    let cd = net.new_edge_between(c, d, None).unwrap();

    for (x, y) in [(ab, bc), (bc, cd), (ab, cd)] {
        assert_eq!(
            net.share_vertex_with(x, y).unwrap(),
            net.share_vertex_with(y, x).unwrap()
        );
    }
    assert!(net.share_vertex_with(ab, bc).unwrap());
    assert!(!net.share_vertex_with(ab, cd).unwrap());
}

#[test]
fn value_equality_compares_endpoints_and_curve() {
    let mut net = Network::<LineSegment>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));
    let a2 = net.new_vertex(p(0.0, 0.0));
    let b2 = net.new_vertex(p(1.0, 1.0));

    let seg = LineSegment::new(p(0.0, 0.0), p(1.0, 1.0));
    let arc_ish = LineSegment::new(p(0.0, 0.0), p(0.5, 0.5));

    let e = net.new_edge_between(a, b, Some(seg)).unwrap();
    let same = net.new_edge_between(a2, b2, Some(seg)).unwrap();
    let other_curve = net.new_edge_between(a2, b2, Some(arc_ish)).unwrap();

    // Identity vs value equality.
    assert_ne!(e, same);
    assert!(net.edges_equal(e, e).unwrap());
    assert!(net.edges_equal(e, same).unwrap());
    assert!(!net.edges_equal(e, other_curve).unwrap());

    // Reversed endpoints are a different value: direction is v1 -> v2.
    let rev = net.new_edge_between(b2, a2, Some(seg)).unwrap();
    assert!(!net.edges_equal(e, rev).unwrap());
}

#[test]
fn curveless_and_curved_edges_differ() {
    let mut net = Network::<LineSegment>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 1.0));
    let bare = net.new_edge_between(a, b, None).unwrap();
    let seg = LineSegment::new(p(0.0, 0.0), p(1.0, 1.0));
    let curved = net.new_edge_between(a, b, Some(seg)).unwrap();
    assert!(!net.edges_equal(bare, curved).unwrap());

    net.set_curve(bare, seg).unwrap();
    assert!(net.edges_equal(bare, curved).unwrap());
}

#[test]
fn edge_loops_maintain_reciprocity() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(p(0.0, 0.0));
    let b = net.new_vertex(p(1.0, 0.0));
    let e = net.new_edge_between(a, b, None).unwrap();
    let loop1 = net.new_one_chain(&[]).unwrap();
    let loop2 = net.new_one_chain(&[]).unwrap();

    net.add_edge_loop(e, loop1).unwrap();
    net.add_edge_loop(e, loop2).unwrap();
    assert_eq!(net.superiors(e).unwrap(), &[loop1, loop2]);
    assert_eq!(net.inferiors(loop1).unwrap(), &[e]);

    net.remove_edge_loop(e, loop1).unwrap();
    assert_eq!(net.superiors(e).unwrap(), &[loop2]);
    assert_eq!(
        net.remove_edge_loop(e, loop1),
        Err(BrepNetError::NotLinked {
            superior: loop1,
            inferior: e,
        })
    );
}
