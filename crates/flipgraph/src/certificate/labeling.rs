//! Minimum-certificate search with branch-and-bound.
//!
//! For a root half-edge and an orientation, vertices are labelled in BFS
//! discovery order starting at the root's target. The emitted symbols are
//! compared against the incumbent while they are produced; a candidate is
//! abandoned on the first symbol that exceeds the incumbent and overwrites it
//! from the first symbol that is smaller.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::mesh::{HalfedgeId, Mesh};

use super::types::{CertCfg, Certificate, Orientation};

/// Initial value of every incumbent symbol; larger than any label.
const SENTINEL: u8 = u8::MAX;

impl Certificate {
    /// Canonical certificate with the default configuration.
    pub fn of(mesh: &Mesh) -> Self {
        Self::with_cfg(mesh, CertCfg::default())
    }

    /// Minimum over all root half-edges and both orientations.
    pub fn with_cfg(mesh: &Mesh, cfg: CertCfg) -> Self {
        let mut search = Search::new(mesh);
        let min_degree = mesh.min_degree();
        for h in mesh.halfedge_ids() {
            if cfg.min_degree_pruning && mesh.degree(mesh.target(h)) != min_degree {
                continue;
            }
            for orientation in Orientation::BOTH {
                search.update(h, orientation);
            }
        }
        search.finish()
    }

    /// Minimum over the four root/orientation combinations anchored at the
    /// undirected edge of `h`. Equal for two edges iff an automorphism maps
    /// one onto the other.
    pub fn rooted(mesh: &Mesh, h: HalfedgeId) -> Self {
        let mut search = Search::new(mesh);
        for root in [h, mesh.twin(h)] {
            for orientation in Orientation::BOTH {
                search.update(root, orientation);
            }
        }
        search.finish()
    }
}

/// Incumbent plus per-call scratch (labels and BFS queue).
struct Search<'a> {
    mesh: &'a Mesh,
    best: Vec<u8>,
    labels: Vec<u8>,
    queue: VecDeque<HalfedgeId>,
}

impl<'a> Search<'a> {
    fn new(mesh: &'a Mesh) -> Self {
        let n = mesh.order();
        debug_assert!(n <= crate::mesh::MAX_ORDER);
        let mut best = vec![SENTINEL; n + mesh.size() + 1];
        best[0] = n as u8;
        Self {
            mesh,
            best,
            labels: vec![0; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Emit the sequence for `(root, orientation)`; returns whether it replaced
    /// the incumbent.
    fn update(&mut self, root: HalfedgeId, orientation: Orientation) -> bool {
        let mesh = self.mesh;
        self.labels.fill(0);
        self.queue.clear();

        let mut index = 1;
        let mut next_label: u8 = 1;
        let mut smaller = false;

        self.labels[mesh.target(root).0] = next_label;
        next_label += 1;
        self.queue.push_back(root);
        while let Some(incoming) = self.queue.pop_front() {
            // The rotation of the dequeued vertex starts at the edge it was
            // discovered through.
            let first = mesh.twin(incoming);
            let mut current = first;
            loop {
                let v = mesh.target(current);
                if self.labels[v.0] == 0 {
                    self.labels[v.0] = next_label;
                    next_label += 1;
                    self.queue.push_back(current);
                }
                if !emit(&mut self.best, &mut index, self.labels[v.0], &mut smaller) {
                    return false;
                }
                current = orientation.rotate(mesh, current);
                if current == first {
                    break;
                }
            }
            if !emit(&mut self.best, &mut index, 0, &mut smaller) {
                return false;
            }
        }
        smaller
    }

    fn finish(self) -> Certificate {
        Certificate { symbols: self.best }
    }
}

/// Compare `symbol` with the incumbent slot and advance. Returns `false` when
/// the candidate is already lexicographically larger.
#[inline]
fn emit(best: &mut [u8], index: &mut usize, symbol: u8, smaller: &mut bool) -> bool {
    let slot = &mut best[*index];
    if !*smaller {
        match symbol.cmp(slot) {
            Ordering::Less => *smaller = true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }
    if *smaller {
        *slot = symbol;
    }
    *index += 1;
    true
}
