//! Half-edge triangulations of the sphere.
//!
//! Purpose
//! - Hold one closed triangulation with O(1) adjacency queries and support the
//!   two mutations the enumeration needs: elementary vertex expansion (to build
//!   a root) and edge flips (to move through the flip graph).
//!
//! Why this design
//! - Vertices and half-edges live in flat arenas and refer to each other by
//!   index. Cloning is a plain copy, dropping releases everything, and the
//!   half-edge index doubles as the stable id that breaks twin symmetry.
//! - Degrees are cached and updated incrementally; canonical labeling reads
//!   them on every call.
//!
//! Layout: `types.rs` (arena and queries), `build.rs` (constructions),
//! `flip.rs` (flips), `validate.rs` (invariant checks), `relabel.rs`
//! (isomorphic copies and random walks).

mod build;
mod flip;
mod relabel;
mod types;
mod validate;

pub use build::BuildStrategy;
pub(crate) use build::check_order;
pub use types::{Halfedge, HalfedgeId, Mesh, MeshError, Outgoing, Vertex, VertexId, MAX_ORDER};

#[cfg(test)]
mod tests;
