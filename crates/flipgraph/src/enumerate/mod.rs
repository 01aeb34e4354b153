//! Flip-graph enumeration: breadth-first search over isomorphism classes.
//!
//! Purpose
//! - Starting from the canonical `n`-vertex triangulation, visit every class
//!   reachable by single flips, assign sequential ids in discovery order, and
//!   record which classes are one flip apart.
//!
//! Why this design
//! - Each class is enqueued once, guarded by the certificate map; the number of
//!   classes is finite, so the search terminates.
//! - Trial flips are undone in place (`flip` is an involution on the edge), so
//!   only newly discovered classes cost a clone.
//! - Every flip edge {A, B} is found once from A and once from B (through the
//!   edge that flips back), so the finished adjacency is symmetric.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use tracing::debug;

use crate::certificate::{CertCfg, Certificate, CertificateError};
use crate::mesh::{HalfedgeId, Mesh, MeshError};

/// Enumeration configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumCfg {
    pub cert: CertCfg,
    /// Flip only one edge per automorphism orbit of each scanned mesh, using
    /// [`Certificate::rooted`]. The resulting graph is identical; large
    /// symmetric classes get cheaper to scan.
    pub skip_equivalent_edges: bool,
}

/// Errors for lookups into a finished flip graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipGraphError {
    IndexOutOfRange { index: usize, len: usize },
    Certificate(CertificateError),
}

impl fmt::Display for FlipGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "class index {index} out of range (graph has {len} classes)")
            }
            Self::Certificate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FlipGraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Certificate(e) => Some(e),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<CertificateError> for FlipGraphError {
    fn from(e: CertificateError) -> Self {
        Self::Certificate(e)
    }
}

/// Flip graph over isomorphism classes of `n`-vertex triangulations.
///
/// Class `i` is represented by `certificates[i]`; `adjacency[i]` lists the
/// classes one flip away, in discovery order, without self-loops or repeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipGraph {
    order: usize,
    adjacency: Vec<Vec<usize>>,
    certificates: Vec<Certificate>,
}

impl FlipGraph {
    /// Enumerate with the default configuration.
    pub fn compute(n: usize) -> Result<Self, MeshError> {
        Self::compute_with(n, EnumCfg::default())
    }

    pub fn compute_with(n: usize, cfg: EnumCfg) -> Result<Self, MeshError> {
        let root = Mesh::canonical(n)?;
        Ok(Enumerator::new(cfg).run(root))
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Vertex count of the enumerated triangulations.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn neighbors(&self, i: usize) -> Result<&[usize], FlipGraphError> {
        self.check_index(i)?;
        Ok(&self.adjacency[i])
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Number of undirected flip edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// True iff every edge `i -> j` has its reverse `j -> i`.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .enumerate()
            .all(|(i, out)| out.iter().all(|&j| self.adjacency[j].contains(&i)))
    }

    pub fn certificate(&self, i: usize) -> Result<&Certificate, FlipGraphError> {
        self.check_index(i)?;
        Ok(&self.certificates[i])
    }

    /// Certificate of class `i` counted from the end (`0` is the last class).
    pub fn certificate_rev(&self, i: usize) -> Result<&Certificate, FlipGraphError> {
        self.check_index(i)?;
        Ok(&self.certificates[self.len() - 1 - i])
    }

    /// Reconstruct a representative triangulation of class `i`.
    pub fn mesh(&self, i: usize) -> Result<Mesh, FlipGraphError> {
        Ok(self.certificate(i)?.to_mesh()?)
    }

    /// Class id of a certificate, if it belongs to this graph. Linear scan.
    pub fn index_of(&self, cert: &Certificate) -> Option<usize> {
        self.certificates.iter().position(|c| c == cert)
    }

    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<Certificate>) {
        (self.adjacency, self.certificates)
    }

    fn check_index(&self, index: usize) -> Result<(), FlipGraphError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(FlipGraphError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

/// BFS state: work queue, certificate index, and the graph under construction.
struct Enumerator {
    cfg: EnumCfg,
    queue: VecDeque<(Mesh, usize)>,
    index: BTreeMap<Certificate, usize>,
    adjacency: Vec<Vec<usize>>,
    certificates: Vec<Certificate>,
}

impl Enumerator {
    fn new(cfg: EnumCfg) -> Self {
        Self {
            cfg,
            queue: VecDeque::new(),
            index: BTreeMap::new(),
            adjacency: Vec::new(),
            certificates: Vec::new(),
        }
    }

    fn run(mut self, root: Mesh) -> FlipGraph {
        let order = root.order();
        let code = Certificate::with_cfg(&root, self.cfg.cert);
        debug!(n = order, symbols = code.len(), "root certificate");
        self.id_of(code, &root);
        let mut scanned = 0usize;
        while let Some((mut mesh, id)) = self.queue.pop_front() {
            self.scan(&mut mesh, id);
            scanned += 1;
            if scanned % 10_000 == 0 {
                debug!(
                    scanned,
                    classes = self.certificates.len(),
                    queued = self.queue.len(),
                    "enumeration progress"
                );
            }
        }
        let graph = FlipGraph {
            order,
            adjacency: self.adjacency,
            certificates: self.certificates,
        };
        debug!(
            n = order,
            classes = graph.len(),
            edges = graph.edge_count(),
            "flip graph complete"
        );
        graph
    }

    /// Try every representative flippable edge of `mesh`, restoring it after
    /// each trial.
    fn scan(&mut self, mesh: &mut Mesh, id: usize) {
        let mut orbits = BTreeSet::new();
        for i in 0..mesh.size() {
            let h = HalfedgeId(i);
            if !mesh.is_representative(h) || !mesh.is_flippable(h) {
                continue;
            }
            if self.cfg.skip_equivalent_edges && !orbits.insert(Certificate::rooted(mesh, h)) {
                continue;
            }
            mesh.flip(h);
            let code = Certificate::with_cfg(mesh, self.cfg.cert);
            let other = self.id_of(code, mesh);
            if other != id && !self.adjacency[id].contains(&other) {
                self.adjacency[id].push(other);
            }
            // h and its twin swap directions; every other half-edge is back in place.
            mesh.flip(h);
        }
    }

    /// Existing id of `code`, or a fresh one with a clone of `mesh` enqueued.
    fn id_of(&mut self, code: Certificate, mesh: &Mesh) -> usize {
        match self.index.entry(code) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let id = self.certificates.len();
                self.certificates.push(e.key().clone());
                self.adjacency.push(Vec::new());
                self.queue.push_back((mesh.clone(), id));
                e.insert(id);
                id
            }
        }
    }
}
