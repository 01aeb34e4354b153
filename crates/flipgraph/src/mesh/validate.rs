//! Always-available structural validation.
//!
//! Internal fast paths only `debug_assert!`; tests, reconstruction and the
//! CLI call `validate` explicitly. The checks tolerate arbitrary garbage
//! (out-of-range ids, open rotations) and never panic.

use super::types::{HalfedgeId, Mesh, MeshError, VertexId};

impl Mesh {
    pub fn validate(&self) -> Result<(), MeshError> {
        let n = self.order();
        let m = self.size();
        if n < 3 || m != 2 * (3 * n - 6) {
            return Err(MeshError::violation(format!(
                "expected {} half-edges for {n} vertices, found {m}",
                if n < 3 { 0 } else { 2 * (3 * n - 6) }
            )));
        }
        self.check_references()?;
        self.check_faces()?;
        self.check_degrees()
    }

    fn check_references(&self) -> Result<(), MeshError> {
        let (n, m) = (self.order(), self.size());
        for (i, he) in self.halfedges.iter().enumerate() {
            let refs = [he.twin, he.next, he.prev];
            if he.target.0 >= n || refs.iter().any(|r| r.0 >= m) {
                return Err(MeshError::violation(format!(
                    "half-edge {i} has a dangling reference"
                )));
            }
        }
        for (i, v) in self.vertices.iter().enumerate() {
            if v.halfedge.0 >= m {
                return Err(MeshError::violation(format!(
                    "vertex {i} has no outgoing half-edge"
                )));
            }
        }
        Ok(())
    }

    fn check_faces(&self) -> Result<(), MeshError> {
        for h in self.halfedge_ids() {
            let twin = self.twin(h);
            if twin == h || self.twin(twin) != h {
                return Err(MeshError::violation(format!("twin of {h:?} is not an involution")));
            }
            if self.prev(self.next(h)) != h || self.next(self.prev(h)) != h {
                return Err(MeshError::violation(format!("next/prev of {h:?} disagree")));
            }
            if self.next(self.next(self.next(h))) != h {
                return Err(MeshError::violation(format!("face of {h:?} is not a triangle")));
            }
            if self.target(h) != self.source(self.next(h)) {
                return Err(MeshError::violation(format!(
                    "{h:?} does not end where its successor starts"
                )));
            }
            if self.target(h) == self.source(h) {
                return Err(MeshError::violation(format!("{h:?} is a loop")));
            }
        }
        for v in self.vertex_ids() {
            if self.source(self.vertex(v).halfedge) != v {
                return Err(MeshError::violation(format!(
                    "outgoing half-edge of {v:?} starts elsewhere"
                )));
            }
        }
        Ok(())
    }

    fn check_degrees(&self) -> Result<(), MeshError> {
        let n = self.order();
        // The base triangle (n = 3) is the only closed triangulation with degree 2.
        let min_degree = if n == 3 { 2 } else { 3 };
        let mut sum = 0;
        for v in self.vertex_ids() {
            let count = self.rotation_len(v).ok_or_else(|| {
                MeshError::violation(format!("rotation around {v:?} does not close"))
            })?;
            if count != self.degree(v) {
                return Err(MeshError::violation(format!(
                    "{v:?} caches degree {} but has {count} neighbours",
                    self.degree(v)
                )));
            }
            if count < min_degree {
                return Err(MeshError::violation(format!("{v:?} has degree {count}")));
            }
            let mut seen = self.neighbors(v).collect::<Vec<_>>();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != count {
                return Err(MeshError::violation(format!("{v:?} has a repeated neighbour")));
            }
            sum += count;
        }
        if sum != self.size() {
            return Err(MeshError::violation(format!(
                "degree sum {sum} differs from half-edge count {}",
                self.size()
            )));
        }
        Ok(())
    }

    /// Length of the rotation around `v`, or `None` if it fails to close
    /// within `size()` steps.
    fn rotation_len(&self, v: VertexId) -> Option<usize> {
        let first: HalfedgeId = self.vertex(v).halfedge;
        let mut current = first;
        for count in 1..=self.size() {
            if self.source(current) != v {
                return None;
            }
            current = self.next(self.twin(current));
            if current == first {
                return Some(count);
            }
        }
        None
    }
}
