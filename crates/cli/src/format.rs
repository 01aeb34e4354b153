//! Text renderings of flip graphs, certificates, and triangulations.

use anyhow::{Context, Result};
use flipgraph::api::{Certificate, FlipGraph, Mesh};
use polars::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

/// `<class count>` then one line `<id> <neighbour ids...>` per class.
pub fn adjacency_text(adjacency: &[Vec<usize>]) -> String {
    let mut out = format!("{}\n", adjacency.len());
    for (i, nbrs) in adjacency.iter().enumerate() {
        let _ = write!(out, "{i}");
        for w in nbrs {
            let _ = write!(out, " {w}");
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
pub struct GraphJson<'a> {
    pub n: usize,
    pub classes: usize,
    pub edges: usize,
    pub adjacency: &'a [Vec<usize>],
    pub certificates: Vec<&'a [u8]>,
}

impl<'a> From<&'a FlipGraph> for GraphJson<'a> {
    fn from(graph: &'a FlipGraph) -> Self {
        Self {
            n: graph.order(),
            classes: graph.len(),
            edges: graph.edge_count(),
            adjacency: graph.adjacency(),
            certificates: graph.certificates().iter().map(|c| c.symbols()).collect(),
        }
    }
}

pub fn graph_json(graph: &FlipGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GraphJson::from(graph))?)
}

fn letter(label: u8) -> char {
    char::from_u32('a' as u32 + u32::from(label) - 1).unwrap_or('?')
}

/// Order on the first line, then one line of neighbour letters per vertex
/// (`a` is label 1).
pub fn certificate_text(cert: &Certificate) -> String {
    let mut out = format!("{}\n", cert.order());
    for group in cert.groups() {
        out.extend(group.iter().map(|&l| letter(l)));
        out.push('\n');
    }
    out
}

/// Graphviz description; flippable edges red, rigid ones black.
pub fn triangulation_dot(mesh: &Mesh) -> String {
    let mut out = String::from("graph triangulation {\n  node [shape=circle];\n");
    for h in mesh.halfedge_ids().filter(|&h| mesh.is_representative(h)) {
        let color = if mesh.is_flippable(h) { "red" } else { "black" };
        let _ = writeln!(
            out,
            "  {} -- {} [color={color}];",
            mesh.source(h).0,
            mesh.target(h).0
        );
    }
    out.push_str("}\n");
    out
}

pub fn histogram_frame(histogram: &[usize]) -> PolarsResult<DataFrame> {
    let distance: Vec<u64> = (0..histogram.len() as u64).collect();
    let count: Vec<u64> = histogram.iter().map(|&c| c as u64).collect();
    df!("distance" => distance, "count" => count)
}

pub fn write_histogram_csv(histogram: &[usize], path: &Path) -> Result<()> {
    let mut frame = histogram_frame(histogram)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
