//! Certificate value type, search configuration, and errors.

use std::fmt;

use crate::mesh::{check_order, HalfedgeId, Mesh};

/// Canonical, isomorphism-invariant encoding of a triangulation.
///
/// Layout: `[n, group_1, ..., group_n]` where group `k` lists the labels of
/// the neighbours of the vertex labelled `k` in rotation order, followed by a
/// terminating `0`. Total length is `n + m + 1` for `m` half-edges.
///
/// Ordering is lexicographic on the symbols.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Certificate {
    pub(crate) symbols: Vec<u8>,
}

/// Rotation order used when listing a vertex's neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `next(twin(h))`
    Clockwise,
    /// `twin(prev(h))`
    CounterClockwise,
}

impl Orientation {
    pub const BOTH: [Self; 2] = [Self::Clockwise, Self::CounterClockwise];

    /// Following outgoing half-edge around the source of `h`.
    #[inline]
    pub fn rotate(self, mesh: &Mesh, h: HalfedgeId) -> HalfedgeId {
        match self {
            Self::Clockwise => mesh.next(mesh.twin(h)),
            Self::CounterClockwise => mesh.twin(mesh.prev(h)),
        }
    }
}

/// Canonical-labeling configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertCfg {
    /// Only root the search at half-edges whose target has minimum degree.
    /// Never changes the result: the first group of any certificate has
    /// length `degree(root target) + 1`, so the minimum starts at a
    /// minimum-degree vertex.
    pub min_degree_pruning: bool,
}

impl Default for CertCfg {
    fn default() -> Self {
        Self {
            min_degree_pruning: true,
        }
    }
}

/// Errors reported when symbols do not describe a triangulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateError {
    Malformed { reason: String },
}

impl CertificateError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed certificate: {reason}"),
        }
    }
}

impl std::error::Error for CertificateError {}

impl Certificate {
    /// Wrap raw symbols after a structural check (length, range, group count).
    /// Whether the groups describe a triangulation is only known after
    /// [`Mesh::from_certificate`].
    pub fn from_symbols(symbols: Vec<u8>) -> Result<Self, CertificateError> {
        let Some(&head) = symbols.first() else {
            return Err(CertificateError::malformed("empty symbol sequence"));
        };
        let n = head as usize;
        check_order(n).map_err(|e| CertificateError::malformed(e.to_string()))?;
        let expected = n + 2 * (3 * n - 6) + 1;
        if symbols.len() != expected {
            return Err(CertificateError::malformed(format!(
                "expected {expected} symbols for {n} vertices, found {}",
                symbols.len()
            )));
        }
        if let Some(pos) = symbols[1..].iter().position(|&s| s as usize > n) {
            return Err(CertificateError::malformed(format!(
                "symbol {} at position {} exceeds vertex count {n}",
                symbols[pos + 1],
                pos + 1
            )));
        }
        let groups = symbols[1..].iter().filter(|&&s| s == 0).count();
        if groups != n || symbols.last() != Some(&0) {
            return Err(CertificateError::malformed(format!(
                "expected {n} zero-terminated groups, found {groups}"
            )));
        }
        Ok(Self { symbols })
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of vertices of the encoded triangulation.
    #[inline]
    pub fn order(&self) -> usize {
        self.symbols.first().copied().unwrap_or(0) as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Per-vertex neighbour label lists (labels are 1-based), in label order.
    pub fn groups(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let body = self.symbols.get(1..).unwrap_or(&[]);
        body.split(|&s| s == 0).take(self.order())
    }

    /// Rebuild a mesh whose vertex `i` carries label `i + 1`.
    pub fn to_mesh(&self) -> Result<Mesh, CertificateError> {
        Mesh::from_certificate(self)
    }
}
