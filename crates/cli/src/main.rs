mod format;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flipgraph::api::{build_flip_graph, certificate_at, center_bound, diameter, distance_histogram};
use flipgraph::metrics::center_bound_counts;
use provenance::Payload;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "flipgraph")]
#[command(about = "Flip graphs of triangulations of the sphere")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to provenance and logs
    #[arg(long)]
    vk: Option<String>,

    /// Report elapsed wall time on stderr
    #[arg(long, global = true)]
    time: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Debug)]
struct Target {
    /// Vertex count of the triangulations
    #[arg(short, long)]
    n: usize,

    /// Write the result here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum GraphFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MeshFormat {
    Text,
    Dot,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate the flip graph and print its adjacency list
    Generate {
        #[command(flatten)]
        target: Target,
        #[arg(long, value_enum, default_value_t = GraphFormat::Text)]
        format: GraphFormat,
    },
    /// Print the flip-graph diameter
    Diameter {
        #[arg(short, long)]
        n: usize,
    },
    /// Distance histogram from one class, as CSV
    Histogram {
        #[command(flatten)]
        target: Target,
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Print one class as certificate letters or Graphviz
    Triangulation {
        #[command(flatten)]
        target: Target,
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Count the index from the last class
        #[arg(long)]
        reverse: bool,
        #[arg(long, value_enum, default_value_t = MeshFormat::Text)]
        format: MeshFormat,
    },
    /// Single-center flip-distance bounds
    Test {
        #[arg(short, long)]
        n: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let vk = cmd.vk.as_deref();
    let start = Instant::now();
    match cmd.action {
        Action::Generate { target, format } => generate(&target, format, vk)?,
        Action::Diameter { n } => print_diameter(n)?,
        Action::Histogram { target, index } => histogram(&target, index, vk)?,
        Action::Triangulation {
            target,
            index,
            reverse,
            format,
        } => triangulation(&target, index, reverse, format, vk)?,
        Action::Test { n } => bound_report(n)?,
    }
    if cmd.time {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        tracing::info!(elapsed_ms, "done");
        eprintln!("elapsed: {elapsed_ms:.3} ms");
    }
    Ok(())
}

fn generate(target: &Target, format: GraphFormat, vk: Option<&str>) -> Result<()> {
    tracing::info!(n = target.n, ?format, vk = ?vk, "generate");
    let graph = build_flip_graph(target.n)?;
    let text = match format {
        GraphFormat::Text => format::adjacency_text(graph.adjacency()),
        GraphFormat::Json => format::graph_json(&graph)?,
    };
    emit(
        &text,
        target.out.as_deref(),
        Payload::new(
            "generate",
            json!({"n": target.n, "format": format!("{format:?}"), "vk": vk}),
        ),
    )
}

fn print_diameter(n: usize) -> Result<()> {
    tracing::info!(n, "diameter");
    let graph = build_flip_graph(n)?;
    println!("{}", diameter(graph.adjacency()));
    Ok(())
}

fn histogram(target: &Target, index: usize, vk: Option<&str>) -> Result<()> {
    tracing::info!(n = target.n, index, vk = ?vk, "histogram");
    let graph = build_flip_graph(target.n)?;
    graph.certificate(index)?;
    let hist = distance_histogram(graph.adjacency(), &[index]);
    match target.out.as_deref() {
        Some(path) => {
            format::write_histogram_csv(&hist, path)?;
            let payload = Payload::new(
                "histogram",
                json!({"n": target.n, "index": index, "vk": vk}),
            );
            provenance::write_sidecar(path, payload)?;
        }
        None => {
            for (d, count) in hist.iter().enumerate() {
                println!("{d} {count}");
            }
        }
    }
    Ok(())
}

fn triangulation(
    target: &Target,
    index: usize,
    reverse: bool,
    format: MeshFormat,
    vk: Option<&str>,
) -> Result<()> {
    tracing::info!(n = target.n, index, reverse, ?format, vk = ?vk, "triangulation");
    let graph = build_flip_graph(target.n)?;
    let cert = certificate_at(&graph, index, reverse)?;
    let text = match format {
        MeshFormat::Text => format::certificate_text(cert),
        MeshFormat::Dot => format::triangulation_dot(&cert.to_mesh()?),
    };
    emit(
        &text,
        target.out.as_deref(),
        Payload::new(
            "triangulation",
            json!({
                "n": target.n,
                "index": index,
                "reverse": reverse,
                "format": format!("{format:?}"),
                "vk": vk
            }),
        ),
    )
}

fn bound_report(n: usize) -> Result<()> {
    tracing::info!(n, "test");
    let graph = build_flip_graph(n)?;
    let adj = graph.adjacency();
    let root = center_bound(&distance_histogram(adj, &[0]));
    let counts = center_bound_counts(adj);
    let best = counts.iter().position(|&c| c > 0).unwrap_or(0);
    println!("classes {}", graph.len());
    println!("root_bound {root}");
    println!("best_bound {best}");
    for (bound, count) in counts.iter().enumerate().filter(|&(_, &c)| c > 0) {
        println!("bound {bound} {count}");
    }
    Ok(())
}

fn emit(text: &str, out: Option<&Path>, payload: Payload) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = provenance::write_sidecar(path, payload)?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn emit_writes_file_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("graph.txt");
        emit("2\n0 1\n1 0\n", Some(&out), Payload::new("generate", json!({"n": 6}))).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "2\n0 1\n1 0\n");
        assert!(dir.path().join("nested").join("graph.provenance.json").exists());
    }

    #[test]
    fn histogram_rejects_out_of_range_index() {
        let target = Target { n: 6, out: None };
        let err = histogram(&target, 2, None).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn triangulation_writes_dot_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tri.dot");
        let target = Target {
            n: 7,
            out: Some(out.clone()),
        };
        triangulation(&target, 0, true, MeshFormat::Dot, None).unwrap();
        let dot = fs::read_to_string(&out).unwrap();
        assert!(dot.starts_with("graph triangulation {"));
        assert!(triangulation(&target, 5, false, MeshFormat::Text, None).is_err());
    }

    #[test]
    fn arguments_parse_into_modes() {
        let cmd = Cmd::try_parse_from([
            "flipgraph",
            "--time",
            "triangulation",
            "-n",
            "8",
            "--index",
            "3",
            "--reverse",
            "--format",
            "dot",
        ])
        .unwrap();
        assert!(cmd.time);
        match cmd.action {
            Action::Triangulation {
                target,
                index,
                reverse,
                format,
            } => {
                assert_eq!(target.n, 8);
                assert_eq!(index, 3);
                assert!(reverse);
                assert!(matches!(format, MeshFormat::Dot));
            }
            _ => panic!("wrong mode"),
        }
    }
}
