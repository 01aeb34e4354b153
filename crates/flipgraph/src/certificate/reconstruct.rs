//! Certificate → mesh.

use crate::mesh::{HalfedgeId, Mesh, VertexId};

use super::types::{Certificate, CertificateError};

impl Mesh {
    /// Rebuild the triangulation encoded by `cert`; vertex `i` gets label `i + 1`.
    ///
    /// The half-edge pair of an undirected edge is created when its smaller
    /// endpoint is read and looked up again when the larger one is. Any
    /// inconsistency (dangling label, missing twin, result failing
    /// [`Mesh::validate`]) is reported as [`CertificateError::Malformed`].
    pub fn from_certificate(cert: &Certificate) -> Result<Self, CertificateError> {
        let n = cert.order();
        let mut mesh = Self::with_capacity(n, cert.len().saturating_sub(n + 1));
        for _ in 0..n {
            mesh.new_vertex();
        }
        let mut groups = 0;
        for (i, group) in cert.groups().enumerate() {
            groups += 1;
            let a = VertexId(i);
            let mut first: Option<HalfedgeId> = None;
            let mut last: Option<HalfedgeId> = None;
            for &symbol in group {
                let j = (symbol as usize).wrapping_sub(1);
                if j >= n {
                    return Err(CertificateError::malformed(format!(
                        "vertex {} lists out-of-range label {symbol}",
                        i + 1
                    )));
                }
                if j == i {
                    return Err(CertificateError::malformed(format!(
                        "vertex {} lists itself",
                        i + 1
                    )));
                }
                let b = VertexId(j);
                let current = if i < j {
                    let out = mesh.new_halfedge();
                    let back = mesh.new_halfedge();
                    mesh.make_twins(out, back);
                    mesh.halfedges[out.0].target = b;
                    mesh.halfedges[back.0].target = a;
                    out
                } else {
                    let back = mesh.find_halfedge_checked(b, a).ok_or_else(|| {
                        CertificateError::malformed(format!(
                            "no edge {} -> {} to pair with",
                            j + 1,
                            i + 1
                        ))
                    })?;
                    mesh.twin(back)
                };
                first.get_or_insert(current);
                if let Some(last) = last {
                    mesh.make_consecutive(last, current);
                }
                last = Some(mesh.twin(current));
                mesh.vertices[i].degree += 1;
            }
            let (Some(first), Some(last)) = (first, last) else {
                return Err(CertificateError::malformed(format!(
                    "vertex {} has no neighbours",
                    i + 1
                )));
            };
            mesh.make_consecutive(last, first);
            mesh.vertices[i].halfedge = first;
        }
        if groups != n {
            return Err(CertificateError::malformed(format!(
                "expected {n} groups, found {groups}"
            )));
        }
        mesh.validate()
            .map_err(|e| CertificateError::malformed(e.to_string()))?;
        Ok(mesh)
    }

    /// `find_halfedge` for a mesh under construction: tolerates unset links
    /// and rotations that never close.
    fn find_halfedge_checked(&self, a: VertexId, b: VertexId) -> Option<HalfedgeId> {
        let m = self.size();
        let first = self.vertices.get(a.0)?.halfedge;
        let mut current = first;
        for _ in 0..m {
            let he = self.halfedges.get(current.0)?;
            if he.target == b {
                return Some(current);
            }
            current = self.halfedges.get(he.twin.0)?.next;
            if current == first {
                return None;
            }
        }
        None
    }
}
