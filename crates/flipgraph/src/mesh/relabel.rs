//! Isomorphic copies and random walks, used to exercise certificate invariance.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Halfedge, HalfedgeId, Mesh, Vertex, VertexId};

impl Mesh {
    /// Same triangulation with vertex `i` stored at `vertex_perm[i]` and
    /// half-edge `j` stored at `halfedge_perm[j]`.
    ///
    /// Panics if either slice is not a permutation of the matching arena.
    pub fn permuted(&self, vertex_perm: &[usize], halfedge_perm: &[usize]) -> Self {
        assert!(is_permutation(vertex_perm, self.order()), "bad vertex permutation");
        assert!(is_permutation(halfedge_perm, self.size()), "bad half-edge permutation");
        let hmap = |h: HalfedgeId| HalfedgeId(halfedge_perm[h.0]);
        let mut vertices = vec![Vertex::default(); self.order()];
        for (i, v) in self.vertices.iter().enumerate() {
            vertices[vertex_perm[i]] = Vertex {
                halfedge: hmap(v.halfedge),
                degree: v.degree,
            };
        }
        let mut halfedges = vec![Halfedge::default(); self.size()];
        for (j, he) in self.halfedges.iter().enumerate() {
            halfedges[halfedge_perm[j]] = Halfedge {
                target: VertexId(vertex_perm[he.target.0]),
                twin: hmap(he.twin),
                next: hmap(he.next),
                prev: hmap(he.prev),
            };
        }
        Self {
            vertices,
            halfedges,
        }
    }

    /// Random storage order for both arenas.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Self {
        let mut vertex_perm: Vec<usize> = (0..self.order()).collect();
        let mut halfedge_perm: Vec<usize> = (0..self.size()).collect();
        vertex_perm.shuffle(rng);
        halfedge_perm.shuffle(rng);
        self.permuted(&vertex_perm, &halfedge_perm)
    }

    /// Mirror image: every face is traversed in the opposite direction.
    ///
    /// Each half-edge keeps its endpoints but moves to the face on the other
    /// side of its edge.
    pub fn mirrored(&self) -> Self {
        let mut out = self.clone();
        for h in self.halfedge_ids() {
            let twin = self.twin(h);
            out.halfedges[h.0].next = self.twin(self.prev(twin));
            out.halfedges[h.0].prev = self.twin(self.next(twin));
        }
        out
    }

    /// Apply up to `steps` flips, each on a uniformly chosen flippable edge.
    /// Returns the number of flips performed.
    pub fn random_flip_walk<R: Rng>(&mut self, rng: &mut R, steps: usize) -> usize {
        let mut done = 0;
        for _ in 0..steps {
            let candidates: Vec<HalfedgeId> = self.flippable_edges().collect();
            let Some(&h) = candidates.choose(rng) else {
                break;
            };
            self.flip(h);
            done += 1;
        }
        done
    }
}

fn is_permutation(perm: &[usize], len: usize) -> bool {
    if perm.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    perm.iter()
        .all(|&p| p < len && !std::mem::replace(&mut seen[p], true))
}
