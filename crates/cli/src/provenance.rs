//! `<stem>.provenance.json` sidecars for every file the CLI writes.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file.
pub struct Payload {
    pub mode: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(mode: &'static str, params: Value) -> Self {
        Self { mode, params }
    }
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "flipgraph_version": flipgraph::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "mode": payload.mode,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_replaces_the_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/graph9.txt"));
        assert_eq!(derived, Path::new("/tmp/out/graph9.provenance.json"));
    }

    #[test]
    fn sidecar_records_mode_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hist.csv");
        fs::write(&artifact, "distance,count\n").unwrap();
        let payload = Payload::new("histogram", json!({"n": 8, "index": 3}));
        let path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["mode"], "histogram");
        assert_eq!(parsed["params"]["index"], 3);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}
