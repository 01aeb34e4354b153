//! Deterministic constructions by repeated elementary vertex expansion.
//!
//! Every strategy starts from the two-faced base triangle and inserts `n - 3`
//! vertices, each into one existing face. Only `Fan` is used as the BFS root;
//! the others exist to cross-check certificates against known shapes.

use std::collections::VecDeque;

use super::types::{HalfedgeId, Mesh, MeshError, MAX_ORDER};

/// Which face receives the next inserted vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStrategy {
    /// Always the face of the root half-edge: two poles adjacent to everything
    /// and a path through the remaining vertices.
    #[default]
    Fan,
    /// Always the face spanned by the two most recent vertices (stacked path).
    Spine,
    /// Alternate between the two faces of the root edge. Isomorphic to `Fan`,
    /// but with a different storage layout.
    Alternating,
    /// FIFO over all faces created so far.
    BreadthFirst,
}

pub(crate) fn check_order(n: usize) -> Result<(), MeshError> {
    if (3..=MAX_ORDER).contains(&n) {
        Ok(())
    } else {
        Err(MeshError::InvalidOrder { n })
    }
}

impl Mesh {
    /// The canonical `n`-vertex triangulation used as the enumeration root.
    pub fn canonical(n: usize) -> Result<Self, MeshError> {
        Self::build(n, BuildStrategy::Fan)
    }

    /// Build an `n`-vertex triangulation with the given expansion strategy.
    pub fn build(n: usize, strategy: BuildStrategy) -> Result<Self, MeshError> {
        check_order(n)?;
        let (mut mesh, root) = Self::base_triangle(n);
        match strategy {
            BuildStrategy::Fan => {
                for _ in 3..n {
                    mesh.expand_three(root);
                }
            }
            BuildStrategy::Spine => {
                let mut h = root;
                for _ in 3..n {
                    mesh.expand_three(h);
                    // `next(h)` now ends at the inserted vertex.
                    h = mesh.next(h);
                }
            }
            BuildStrategy::Alternating => {
                let other = mesh.twin(root);
                for k in 3..n {
                    mesh.expand_three(if k % 2 == 1 { root } else { other });
                }
            }
            BuildStrategy::BreadthFirst => {
                let mut faces = VecDeque::from([root, mesh.twin(root)]);
                for _ in 3..n {
                    let Some(h) = faces.pop_front() else {
                        break;
                    };
                    let (bc, ca) = (mesh.next(h), mesh.prev(h));
                    mesh.expand_three(h);
                    faces.extend([h, bc, ca]);
                }
            }
        }
        debug_assert_eq!(mesh.validate(), Ok(()));
        Ok(mesh)
    }

    /// Base triangle `abc` with its two faces; returns the mesh and `a -> b`.
    fn base_triangle(n: usize) -> (Self, HalfedgeId) {
        let mut mesh = Self::with_capacity(n, 2 * (3 * n - 6));
        let a = mesh.new_vertex();
        let b = mesh.new_vertex();
        let c = mesh.new_vertex();
        let ab = mesh.new_halfedge();
        let bc = mesh.new_halfedge();
        let ca = mesh.new_halfedge();
        let ba = mesh.new_halfedge();
        let cb = mesh.new_halfedge();
        let ac = mesh.new_halfedge();
        mesh.make_triangle_with((ab, bc, ca), (c, a, b));
        mesh.make_triangle_with((ac, cb, ba), (b, a, c));
        mesh.make_twins(ab, ba);
        mesh.make_twins(bc, cb);
        mesh.make_twins(ca, ac);
        for v in [a, b, c] {
            mesh.vertices[v.0].degree = 2;
        }
        (mesh, ab)
    }

    /// Elementary vertex expansion: insert a vertex into the face of `h` and
    /// connect it to the three corners. `h` stays in the face it shares with
    /// the new vertex.
    pub fn expand_three(&mut self, h: HalfedgeId) {
        let ab = h;
        let bc = self.next(h);
        let ca = self.prev(h);
        let a = self.target(ca);
        let b = self.target(ab);
        let c = self.target(bc);
        let d = self.new_vertex();

        let (x, y) = (self.new_halfedge(), self.new_halfedge());
        self.make_triangle_with((ab, x, y), (d, a, b));
        let (x, y) = (self.new_halfedge(), self.new_halfedge());
        self.make_triangle_with((bc, x, y), (d, b, c));
        let (x, y) = (self.new_halfedge(), self.new_halfedge());
        self.make_triangle_with((ca, x, y), (d, c, a));

        self.make_twins(self.next(ab), self.prev(bc));
        self.make_twins(self.next(bc), self.prev(ca));
        self.make_twins(self.next(ca), self.prev(ab));

        self.vertices[d.0].degree = 3;
        for v in [a, b, c] {
            self.vertices[v.0].degree += 1;
        }
    }
}
