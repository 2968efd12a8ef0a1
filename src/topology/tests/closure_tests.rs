//! Closure queries: ordering, de-duplication, caching and staleness.

use crate::geometry::Point3;
use crate::topology::kind::EntityKind;
use crate::topology::network::Network;
use crate::topology::point::EntityId;

/// Two triangles sharing edge `ab`.
///
/// Returns (network, face1, face2, shared edge, vertices).
fn two_triangles() -> (Network<()>, EntityId, EntityId, EntityId, [EntityId; 4]) {
    let mut net = Network::new();
    let a = net.new_vertex(Point3::new(0.0, 0.0, 0.0));
    let b = net.new_vertex(Point3::new(1.0, 0.0, 0.0));
    let c = net.new_vertex(Point3::new(0.0, 1.0, 0.0));
    let d = net.new_vertex(Point3::new(1.0, 1.0, 0.0));
    let ab = net.new_edge_between(a, b, None).unwrap();
    let bc = net.new_edge_between(b, c, None).unwrap();
    let ca = net.new_edge_between(c, a, None).unwrap();
    let bd = net.new_edge_between(b, d, None).unwrap();
    let da = net.new_edge_between(d, a, None).unwrap();
    let loop1 = net.new_one_chain(&[ab, bc, ca]).unwrap();
    let loop2 = net.new_one_chain(&[ab, bd, da]).unwrap();
    let f1 = net.new_face(&[loop1]).unwrap();
    let f2 = net.new_face(&[loop2]).unwrap();
    (net, f1, f2, ab, [a, b, c, d])
}

#[test]
fn own_kind_closure_is_identity() {
    let (mut net, f1, _, ab, _) = two_triangles();
    assert_eq!(net.compute_faces(f1).unwrap(), vec![f1]);
    assert_eq!(net.compute_edges(ab).unwrap(), vec![ab]);
}

#[test]
fn downward_closure_deduplicates_shared_structure() {
    let (mut net, f1, _, _, [a, b, c, _]) = two_triangles();
    // Pre-order over loop1 = [ab, bc, ca]: ab contributes a,b; bc
    // contributes c (b already seen); ca contributes nothing new.
    assert_eq!(net.compute_vertices(f1).unwrap(), vec![a, b, c]);
}

#[test]
fn downward_closure_collects_each_kind() {
    let (mut net, f1, f2, ab, _) = two_triangles();
    assert_eq!(net.compute_edges(f1).unwrap().len(), 3);
    assert_eq!(net.compute_edges(f2).unwrap().len(), 3);
    assert_eq!(net.compute_zero_chains(f1).unwrap().len(), 3);
    assert_eq!(net.compute_one_chains(f1).unwrap().len(), 1);
    // The shared edge appears in both faces' closures.
    assert!(net.compute_edges(f1).unwrap().contains(&ab));
    assert!(net.compute_edges(f2).unwrap().contains(&ab));
}

#[test]
fn upward_closure_walks_superiors() {
    let (mut net, f1, f2, ab, [a, b, ..]) = two_triangles();
    // The shared edge participates in both faces.
    let faces = net.compute_faces(ab).unwrap();
    assert_eq!(faces.len(), 2);
    assert!(faces.contains(&f1) && faces.contains(&f2));
    // A vertex reaches faces through zero-chains and edges.
    let faces_of_a = net.compute_faces(a).unwrap();
    assert!(faces_of_a.contains(&f1) && faces_of_a.contains(&f2));
    let loops_of_b = net.compute_one_chains(b).unwrap();
    assert_eq!(loops_of_b.len(), 2);
}

#[test]
fn edge_vertex_closure_uses_endpoint_cache() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(Point3::ORIGIN);
    let b = net.new_vertex(Point3::new(1.0, 1.0, 1.0));
    let e = net.new_edge_between(a, b, None).unwrap();
    assert_eq!(net.compute_vertices(e).unwrap(), vec![a, b]);
}

#[test]
fn self_loop_edge_yields_singleton() {
    let mut net = Network::<()>::new();
    let a = net.new_vertex(Point3::ORIGIN);
    let e = net.new_edge_between(a, a, None).unwrap();
    assert_eq!(net.compute_vertices(e).unwrap(), vec![a]);
}

#[test]
fn empty_edge_has_no_vertices() {
    let mut net = Network::<()>::new();
    let e = net.new_edge();
    assert!(net.compute_vertices(e).unwrap().is_empty());
}

#[test]
fn cached_closure_is_reused_until_invalidated() {
    let (mut net, f1, _, _, _) = two_triangles();
    let first = net.compute_vertices(f1).unwrap();
    let stamp = net.stamp(f1).unwrap();
    let second = net.compute_vertices(f1).unwrap();
    assert_eq!(first, second);
    assert_eq!(net.stamp(f1).unwrap(), stamp);
}

#[test]
fn linking_beneath_invalidates_closures_above() {
    let (mut net, f1, _, _, [a, b, c, _]) = two_triangles();
    assert_eq!(net.compute_vertices(f1).unwrap(), vec![a, b, c]);

    // Splice a new vertex into bc's zero-chain, three levels below the face.
    let m = net.new_vertex(Point3::new(0.5, 0.5, 0.0));
    let loops = net.inferiors(f1).unwrap().to_vec();
    let bc = net.inferiors(loops[0]).unwrap()[1];
    let zc = net.inferiors(bc).unwrap()[0];
    net.link_inferior(zc, m).unwrap();

    let after = net.compute_vertices(f1).unwrap();
    assert!(after.contains(&m), "stale closure returned after mutation");
    assert_eq!(after.len(), 4);
}

#[test]
fn closure_order_follows_link_tables() {
    let mut net = Network::<()>::new();
    let v: Vec<_> = (0..4)
        .map(|i| net.new_vertex(Point3::new(i as f64, 0.0, 0.0)))
        .collect();
    let zc = net.new_zero_chain(&[v[2], v[0], v[3], v[1]]).unwrap();
    assert_eq!(
        net.closure_of(zc, EntityKind::Vertex).unwrap(),
        vec![v[2], v[0], v[3], v[1]]
    );
}
