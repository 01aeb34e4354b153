//! Curated entry points for callers that only need the finished results.
//!
//! The CLI and the examples go through these; everything else is reachable
//! from the module paths as well.

pub use crate::certificate::{CertCfg, Certificate, CertificateError};
pub use crate::enumerate::{EnumCfg, FlipGraph, FlipGraphError};
pub use crate::mesh::{BuildStrategy, Mesh, MeshError};
pub use crate::metrics::{center_bound, diameter, distance_histogram, eccentricity};

/// Enumerate all isomorphism classes of `n`-vertex triangulations and the
/// flips between them. `into_parts()` splits the result into the adjacency
/// list and the per-class certificates.
pub fn build_flip_graph(n: usize) -> Result<FlipGraph, MeshError> {
    FlipGraph::compute(n)
}

/// Certificate of class `i`, or of class `len - 1 - i` when `reverse` is set.
pub fn certificate_at(
    graph: &FlipGraph,
    i: usize,
    reverse: bool,
) -> Result<&Certificate, FlipGraphError> {
    if reverse {
        graph.certificate_rev(i)
    } else {
        graph.certificate(i)
    }
}

/// Rebuild a triangulation from its certificate.
pub fn mesh_from_certificate(cert: &Certificate) -> Result<Mesh, CertificateError> {
    Mesh::from_certificate(cert)
}
