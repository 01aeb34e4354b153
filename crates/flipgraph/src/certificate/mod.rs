//! Canonical labeling of triangulations.
//!
//! Purpose
//! - Map every triangulation to a byte sequence such that two triangulations
//!   are combinatorially isomorphic (reflections included) iff their
//!   certificates are equal, and rebuild a mesh from any certificate.
//!
//! Why this design
//! - A BFS labeling from an oriented root half-edge determines the whole
//!   triangulation, so the minimum over all roots and both orientations is
//!   canonical. Roots are restricted to minimum-degree targets and candidates
//!   are compared incrementally, so most roots are abandoned after a few
//!   symbols.
//! - Labels and the BFS queue are per-call scratch, never stored on the mesh,
//!   so certificates can be computed concurrently from shared `&Mesh`.
//!
//! Layout: `types.rs` (value, config, errors), `labeling.rs` (search),
//! `reconstruct.rs` (certificate → mesh).

mod labeling;
mod reconstruct;
mod types;

pub use types::{CertCfg, Certificate, CertificateError, Orientation};
