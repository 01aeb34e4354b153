//! Flip graphs of triangulations of the sphere, up to isomorphism.
//!
//! Modules
//! - `mesh`: half-edge triangulations, constructions, flips, validation.
//! - `certificate`: canonical labeling and reconstruction.
//! - `enumerate`: breadth-first flip-graph enumeration over certificates.
//! - `metrics`: eccentricity, diameter, distance histograms, center bounds.
//!
//! Everything is single-threaded and deterministic: the same `n` always
//! yields the same class ids and adjacency order.

pub mod api;
pub mod certificate;
pub mod enumerate;
pub mod mesh;
pub mod metrics;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::certificate::{CertCfg, Certificate, CertificateError, Orientation};
    pub use crate::enumerate::{EnumCfg, FlipGraph, FlipGraphError};
    pub use crate::mesh::{BuildStrategy, HalfedgeId, Mesh, MeshError, VertexId, MAX_ORDER};
}
