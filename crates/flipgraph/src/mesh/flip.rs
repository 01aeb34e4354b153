//! Edge flips on the quadrilateral formed by two adjacent triangles.

use super::types::{HalfedgeId, Mesh};

impl Mesh {
    /// True for exactly one half-edge of each undirected edge (the smaller id).
    #[inline]
    pub fn is_representative(&self, h: HalfedgeId) -> bool {
        h < self.twin(h)
    }

    /// False iff the two apex vertices opposite `h` are already adjacent, in
    /// which case the flip would create a duplicate edge. The base triangle's
    /// edges share one apex and are never flippable.
    pub fn is_flippable(&self, h: HalfedgeId) -> bool {
        let apex_a = self.target(self.next(h));
        let apex_b = self.target(self.next(self.twin(h)));
        apex_a != apex_b && self.neighbors(apex_a).all(|v| v != apex_b)
    }

    /// Representative half-edges whose flip is allowed, in storage order.
    pub fn flippable_edges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.halfedge_ids()
            .filter(move |&h| self.is_representative(h) && self.is_flippable(h))
    }

    /// Rotate the diagonal `h` inside its quadrilateral.
    ///
    /// Flipping the same id twice restores the mesh, except that `h` and its
    /// twin have exchanged directions. Ids of all other half-edges, and so the
    /// storage order scanned by the enumerator, are untouched.
    pub fn flip(&mut self, h: HalfedgeId) {
        debug_assert!(self.is_flippable(h), "flip of unflippable edge {h:?}");

        let twin = self.twin(h);
        let t = self.target(h);
        let s = self.target(twin);
        let a = self.target(self.next(h));
        let b = self.target(self.next(twin));
        let ta = self.next(h);
        let as_ = self.prev(h);
        let sb = self.next(twin);
        let bt = self.prev(twin);

        self.make_triangle(h, bt, ta);
        self.make_triangle(twin, as_, sb);
        self.halfedges[h.0].target = b;
        self.halfedges[twin.0].target = a;
        if self.vertices[t.0].halfedge == twin {
            self.vertices[t.0].halfedge = ta;
        }
        if self.vertices[s.0].halfedge == h {
            self.vertices[s.0].halfedge = sb;
        }
        self.vertices[t.0].degree -= 1;
        self.vertices[s.0].degree -= 1;
        self.vertices[a.0].degree += 1;
        self.vertices[b.0].degree += 1;
    }
}
