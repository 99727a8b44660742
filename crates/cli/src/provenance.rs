//! Provenance sidecars: `<stem>.provenance.json` next to every CLI output,
//! recording the code revision, tolerances, run parameters and outcome tallies.

use anyhow::{Context, Result};
use gjk2d::api::{GjkCfg, Intersection};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Tolerances and cap a run used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CfgOut {
    pub max_iterations: usize,
    pub eps_area: f64,
    pub eps_dist: f64,
}

impl From<&GjkCfg> for CfgOut {
    fn from(cfg: &GjkCfg) -> Self {
        Self {
            max_iterations: cfg.max_iterations,
            eps_area: cfg.geom.eps_area,
            eps_dist: cfg.geom.eps_dist,
        }
    }
}

/// Outcome counts over the pairs a command tested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub colliding: u64,
    pub not_colliding: u64,
    pub indeterminate: u64,
    /// Samples that never reached the test (degenerate draws).
    pub skipped: u64,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Intersection) {
        match outcome {
            Intersection::Colliding => self.colliding += 1,
            Intersection::NotColliding => self.not_colliding += 1,
            Intersection::Indeterminate => self.indeterminate += 1,
        }
    }

    pub fn tested(&self) -> u64 {
        self.colliding + self.not_colliding + self.indeterminate
    }
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub command: &'static str,
    pub code_rev: String,
    pub gjk2d_version: &'static str,
    pub cfg: CfgOut,
    pub params: Value,
    pub counts: OutcomeCounts,
    pub outputs: Vec<String>,
}

impl Sidecar {
    pub fn new(command: &'static str, cfg: &GjkCfg, params: Value) -> Self {
        Self {
            command,
            code_rev: current_git_rev(),
            gjk2d_version: gjk2d::VERSION,
            cfg: cfg.into(),
            params,
            counts: OutcomeCounts::default(),
            outputs: Vec::new(),
        }
    }

    pub fn with_counts(mut self, counts: OutcomeCounts) -> Self {
        self.counts = counts;
        self
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        self.outputs.push(artifact.to_string_lossy().into_owned());
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/sweep.csv` → `out/sweep.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
