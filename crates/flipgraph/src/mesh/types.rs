//! Core mesh types: ids, vertices, half-edges, and the owning arena.
//!
//! All cross-references are arena indices, so `Clone` is a deep copy and
//! dropping a `Mesh` releases everything it owns.

use std::fmt;

/// Largest supported vertex count. Labels `1..=n` and the search sentinel
/// (`u8::MAX`) must fit in a single certificate symbol.
pub const MAX_ORDER: usize = 254;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfedgeId(pub usize);

impl VertexId {
    pub(crate) const INVALID: Self = Self(usize::MAX);
}

impl HalfedgeId {
    pub(crate) const INVALID: Self = Self(usize::MAX);
}

/// Vertex record: one outgoing half-edge and the cached degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub halfedge: HalfedgeId,
    pub degree: usize,
}

/// Half-edge record. `next`/`prev` walk the incident triangle; `twin` is the
/// opposite orientation of the same undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Halfedge {
    pub target: VertexId,
    pub twin: HalfedgeId,
    pub next: HalfedgeId,
    pub prev: HalfedgeId,
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            halfedge: HalfedgeId::INVALID,
            degree: 0,
        }
    }
}

impl Default for Halfedge {
    fn default() -> Self {
        Self {
            target: VertexId::INVALID,
            twin: HalfedgeId::INVALID,
            next: HalfedgeId::INVALID,
            prev: HalfedgeId::INVALID,
        }
    }
}

/// One closed triangulation of the sphere.
///
/// Invariants (checked by [`Mesh::validate`]):
/// - `size() == 2 * (3 * order() - 6)`;
/// - `twin(twin(h)) == h`, `next(next(next(h))) == h`, `prev(next(h)) == h`;
/// - every cached degree equals the length of the vertex's rotation and is >= 3.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) halfedges: Vec<Halfedge>,
}

/// Errors reported by mesh construction and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    InvalidOrder { n: usize },
    InvariantViolation { reason: String },
}

impl MeshError {
    pub(crate) fn violation(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { n } => {
                write!(f, "invalid vertex count {n}: expected 3..={MAX_ORDER}")
            }
            Self::InvariantViolation { reason } => write!(f, "mesh invariant violated: {reason}"),
        }
    }
}

impl std::error::Error for MeshError {}

impl Mesh {
    pub(crate) fn with_capacity(num_vertices: usize, num_halfedges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            halfedges: Vec::with_capacity(num_halfedges),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges (twice the number of undirected edges).
    #[inline]
    pub fn size(&self) -> usize {
        self.halfedges.len()
    }

    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.0]
    }

    #[inline]
    pub fn halfedge(&self, h: HalfedgeId) -> &Halfedge {
        &self.halfedges[h.0]
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfedgeId> {
        (0..self.halfedges.len()).map(HalfedgeId)
    }

    #[inline]
    pub fn target(&self, h: HalfedgeId) -> VertexId {
        self.halfedges[h.0].target
    }

    #[inline]
    pub fn source(&self, h: HalfedgeId) -> VertexId {
        self.target(self.twin(h))
    }

    #[inline]
    pub fn twin(&self, h: HalfedgeId) -> HalfedgeId {
        self.halfedges[h.0].twin
    }

    #[inline]
    pub fn next(&self, h: HalfedgeId) -> HalfedgeId {
        self.halfedges[h.0].next
    }

    #[inline]
    pub fn prev(&self, h: HalfedgeId) -> HalfedgeId {
        self.halfedges[h.0].prev
    }

    /// Cached degree of `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.vertices[v.0].degree
    }

    pub fn min_degree(&self) -> usize {
        self.vertices.iter().map(|v| v.degree).min().unwrap_or(0)
    }

    /// Sorted degree sequence; an isomorphism invariant used by tests and reports.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.vertices.iter().map(|v| v.degree).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Outgoing half-edges of `v` in rotation order (`next(twin(h))`).
    pub fn outgoing(&self, v: VertexId) -> Outgoing<'_> {
        let first = self.vertices[v.0].halfedge;
        Outgoing {
            mesh: self,
            first,
            current: Some(first),
        }
    }

    /// Neighbours of `v` in rotation order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing(v).map(move |h| self.target(h))
    }

    /// Half-edge from `a` to `b`, if the two vertices are adjacent.
    pub fn find_halfedge(&self, a: VertexId, b: VertexId) -> Option<HalfedgeId> {
        self.outgoing(a).find(|&h| self.target(h) == b)
    }

    /// Plain adjacency list of the triangulation, indexed by vertex storage order.
    pub fn vertex_adjacency(&self) -> Vec<Vec<usize>> {
        self.vertex_ids()
            .map(|v| self.neighbors(v).map(|w| w.0).collect())
            .collect()
    }

    // Low-level wiring used by the builders.

    pub(crate) fn new_vertex(&mut self) -> VertexId {
        self.vertices.push(Vertex::default());
        VertexId(self.vertices.len() - 1)
    }

    pub(crate) fn new_halfedge(&mut self) -> HalfedgeId {
        self.halfedges.push(Halfedge::default());
        HalfedgeId(self.halfedges.len() - 1)
    }

    pub(crate) fn make_twins(&mut self, a: HalfedgeId, b: HalfedgeId) {
        self.halfedges[a.0].twin = b;
        self.halfedges[b.0].twin = a;
    }

    pub(crate) fn make_consecutive(&mut self, a: HalfedgeId, b: HalfedgeId) {
        self.halfedges[a.0].next = b;
        self.halfedges[b.0].prev = a;
    }

    pub(crate) fn make_triangle(&mut self, a: HalfedgeId, b: HalfedgeId, c: HalfedgeId) {
        self.make_consecutive(a, b);
        self.make_consecutive(b, c);
        self.make_consecutive(c, a);
    }

    /// Triangle `a -> b -> c` whose half-edges end at `vc`, `va`, `vb` respectively.
    /// Each corner's outgoing half-edge is reset to the one leaving it in this triangle.
    pub(crate) fn make_triangle_with(
        &mut self,
        (a, b, c): (HalfedgeId, HalfedgeId, HalfedgeId),
        (va, vb, vc): (VertexId, VertexId, VertexId),
    ) {
        self.make_triangle(a, b, c);
        self.vertices[va.0].halfedge = c;
        self.vertices[vb.0].halfedge = a;
        self.vertices[vc.0].halfedge = b;
        self.halfedges[a.0].target = vc;
        self.halfedges[b.0].target = va;
        self.halfedges[c.0].target = vb;
    }
}

/// Rotation iterator over the outgoing half-edges of one vertex.
pub struct Outgoing<'a> {
    mesh: &'a Mesh,
    first: HalfedgeId,
    current: Option<HalfedgeId>,
}

impl Iterator for Outgoing<'_> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        let cur = self.current?;
        let after = self.mesh.next(self.mesh.twin(cur));
        self.current = (after != self.first).then_some(after);
        Some(cur)
    }
}
