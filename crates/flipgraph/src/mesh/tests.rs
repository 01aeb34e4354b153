//! Mesh construction, flip, and validation tests.

use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const STRATEGIES: [BuildStrategy; 4] = [
    BuildStrategy::Fan,
    BuildStrategy::Spine,
    BuildStrategy::Alternating,
    BuildStrategy::BreadthFirst,
];

fn assert_closed_counts(mesh: &Mesh) {
    let n = mesh.order();
    assert_eq!(mesh.size(), 2 * (3 * n - 6));
    assert!(mesh.vertex_ids().all(|v| mesh.degree(v) >= 3));
    let sum: usize = mesh.vertex_ids().map(|v| mesh.degree(v)).sum();
    assert_eq!(sum, mesh.size());
}

/// Identity on vertices, `h` and its twin swapped.
fn swap_perm(mesh: &Mesh, h: HalfedgeId) -> (Vec<usize>, Vec<usize>) {
    let vperm: Vec<usize> = (0..mesh.order()).collect();
    let mut hperm: Vec<usize> = (0..mesh.size()).collect();
    hperm.swap(h.0, mesh.twin(h).0);
    (vperm, hperm)
}

#[test]
fn canonical_counts_hold_for_small_orders() {
    for n in 4..=24 {
        let mesh = Mesh::canonical(n).unwrap();
        assert_eq!(mesh.order(), n);
        assert_closed_counts(&mesh);
        assert_eq!(mesh.validate(), Ok(()));
    }
}

#[test]
fn base_triangle_is_valid_and_rigid() {
    let mesh = Mesh::canonical(3).unwrap();
    assert_eq!(mesh.size(), 6);
    assert_eq!(mesh.validate(), Ok(()));
    assert_eq!(mesh.flippable_edges().count(), 0);
}

#[test]
fn order_outside_supported_range_is_rejected() {
    assert_eq!(Mesh::canonical(2), Err(MeshError::InvalidOrder { n: 2 }));
    assert_eq!(
        Mesh::build(MAX_ORDER + 1, BuildStrategy::Spine),
        Err(MeshError::InvalidOrder { n: MAX_ORDER + 1 })
    );
    assert!(Mesh::canonical(MAX_ORDER).is_ok());
}

#[test]
fn every_strategy_builds_a_valid_triangulation() {
    for strategy in STRATEGIES {
        for n in 4..=18 {
            let mesh = Mesh::build(n, strategy).unwrap();
            assert_closed_counts(&mesh);
            assert_eq!(mesh.validate(), Ok(()), "{strategy:?} n={n}");
        }
    }
}

#[test]
fn strategies_produce_known_degree_sequences() {
    // Two poles adjacent to everything, the rest a path.
    let fan = Mesh::build(7, BuildStrategy::Fan).unwrap();
    assert_eq!(fan.degree_sequence(), vec![3, 3, 4, 4, 4, 6, 6]);
    let alt = Mesh::build(7, BuildStrategy::Alternating).unwrap();
    assert_eq!(alt.degree_sequence(), fan.degree_sequence());
    let spine = Mesh::build(7, BuildStrategy::Spine).unwrap();
    assert_eq!(spine.degree_sequence(), vec![3, 3, 4, 4, 5, 5, 6]);
    // Triangular bipyramid.
    let bfs = Mesh::build(5, BuildStrategy::BreadthFirst).unwrap();
    assert_eq!(bfs.degree_sequence(), vec![3, 3, 4, 4, 4]);
}

#[test]
fn exactly_one_representative_per_edge() {
    let mesh = Mesh::build(9, BuildStrategy::BreadthFirst).unwrap();
    for h in mesh.halfedge_ids() {
        assert_ne!(mesh.is_representative(h), mesh.is_representative(mesh.twin(h)));
    }
    let reps = mesh.halfedge_ids().filter(|&h| mesh.is_representative(h)).count();
    assert_eq!(reps, mesh.size() / 2);
}

#[test]
fn tetrahedron_has_no_flippable_edge() {
    let mesh = Mesh::canonical(4).unwrap();
    assert!(mesh.halfedge_ids().all(|h| !mesh.is_flippable(h)));
    for v in mesh.vertex_ids() {
        assert_eq!(mesh.neighbors(v).count(), 3);
    }
}

#[test]
fn flip_moves_degrees_between_endpoints_and_apexes() {
    let mut mesh = Mesh::canonical(8).unwrap();
    let h = mesh.flippable_edges().next().unwrap();
    let (s, t) = (mesh.source(h), mesh.target(h));
    let (a, b) = (mesh.target(mesh.next(h)), mesh.target(mesh.next(mesh.twin(h))));
    let before: Vec<usize> = mesh.vertex_ids().map(|v| mesh.degree(v)).collect();
    mesh.flip(h);
    assert_eq!(mesh.validate(), Ok(()));
    assert_eq!(mesh.degree(s), before[s.0] - 1);
    assert_eq!(mesh.degree(t), before[t.0] - 1);
    assert_eq!(mesh.degree(a), before[a.0] + 1);
    assert_eq!(mesh.degree(b), before[b.0] + 1);
    assert!(mesh.find_halfedge(a, b).is_some());
    assert!(mesh.find_halfedge(s, t).is_none());
}

#[test]
fn double_flip_only_swaps_the_flipped_pair() {
    let original = Mesh::build(10, BuildStrategy::Spine).unwrap();
    for h in original.flippable_edges() {
        let mut mesh = original.clone();
        mesh.flip(h);
        mesh.flip(h);
        assert_eq!(mesh.validate(), Ok(()));
        let (vperm, hperm) = swap_perm(&original, h);
        let swapped = original.permuted(&vperm, &hperm);
        assert_eq!(mesh.halfedges, swapped.halfedges);
        let degrees = |m: &Mesh| m.vertex_ids().map(|v| m.degree(v)).collect::<Vec<_>>();
        assert_eq!(degrees(&mesh), degrees(&original));
    }
}

#[test]
fn clone_shares_nothing() {
    let original = Mesh::canonical(9).unwrap();
    let mut copy = original.clone();
    let h = copy.flippable_edges().next().unwrap();
    copy.flip(h);
    assert_ne!(copy, original);
    assert_eq!(original, Mesh::canonical(9).unwrap());
}

#[test]
fn validate_reports_corruption() {
    let good = Mesh::canonical(6).unwrap();

    let mut bad = good.clone();
    bad.halfedges[0].twin = HalfedgeId(bad.size());
    assert!(matches!(bad.validate(), Err(MeshError::InvariantViolation { .. })));

    let mut bad = good.clone();
    bad.vertices[0].degree += 1;
    assert!(matches!(bad.validate(), Err(MeshError::InvariantViolation { .. })));

    let mut bad = good.clone();
    let (h0, h1) = (HalfedgeId(0), HalfedgeId(1));
    bad.halfedges[h0.0].next = h1;
    bad.halfedges[h1.0].next = h0;
    assert!(bad.validate().is_err());

    let mut bad = good.clone();
    bad.halfedges.pop();
    assert!(bad.validate().is_err());
}

#[test]
fn mirror_is_an_involution() {
    let mesh = Mesh::build(11, BuildStrategy::BreadthFirst).unwrap();
    let mirror = mesh.mirrored();
    assert_eq!(mirror.validate(), Ok(()));
    assert_eq!(mirror.degree_sequence(), mesh.degree_sequence());
    assert_eq!(mirror.mirrored(), mesh);
}

#[test]
fn vertex_adjacency_is_symmetric() {
    let mesh = Mesh::build(12, BuildStrategy::Spine).unwrap();
    let adj = mesh.vertex_adjacency();
    for (v, nbrs) in adj.iter().enumerate() {
        assert_eq!(nbrs.len(), mesh.degree(VertexId(v)));
        for &w in nbrs {
            assert!(adj[w].contains(&v));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_walks_stay_valid(seed in any::<u64>(), n in 5usize..14, steps in 0usize..60) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut mesh = Mesh::canonical(n).unwrap();
        mesh.random_flip_walk(&mut rng, steps);
        prop_assert_eq!(mesh.validate(), Ok(()));
        prop_assert_eq!(mesh.order(), n);
        let shuffled = mesh.shuffled(&mut rng);
        prop_assert_eq!(shuffled.validate(), Ok(()));
        prop_assert_eq!(shuffled.degree_sequence(), mesh.degree_sequence());
    }
}
