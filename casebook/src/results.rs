//! Result capture and persistence.
//!
//! Each run writes `meta.json` and `checks.json` under
//! `<results>/<case_id>/<run_id>/` for later aggregation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, warn};

use crate::judge::{Judgment, write_judgment};
use crate::outcome::Outcome;

/// Input for capturing results from a completed run.
#[derive(Debug)]
pub struct CaptureInput<'a> {
    pub case_id: &'a str,
    pub case_path: &'a Path,
    pub run_id: &'a str,
    pub outcome: Outcome,
    pub judgment: &'a Judgment,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Metadata for a casebook run, persisted to `meta.json`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunMeta {
    pub case_id: String,
    pub run_id: String,
    /// SHA-256 hash of the case file, to tell runs of edited cases apart.
    pub case_hash: String,
    pub outcome: Outcome,
    pub start_time: String,
    pub end_time: String,
    pub duration_secs: f64,
    pub checks_total: usize,
    pub checks_passed: usize,
    /// Non-fatal errors encountered during capture.
    pub errors: Vec<String>,
}

/// Write meta and check outcomes for a run; returns the run's results directory.
#[instrument(skip_all, fields(case_id = %input.case_id, run_id = %input.run_id))]
pub fn capture_results(base_dir: &Path, input: &CaptureInput<'_>) -> Result<PathBuf> {
    let results_dir = results_dir(base_dir, input.case_id, input.run_id);
    fs::create_dir_all(&results_dir)
        .with_context(|| format!("create results dir {}", results_dir.display()))?;

    let mut errors = Vec::new();
    let case_hash = match file_sha256(input.case_path) {
        Ok(hash) => hash,
        Err(err) => {
            errors.push(format!("case hash: {err}"));
            String::new()
        }
    };
    if !errors.is_empty() {
        warn!(errors = ?errors, "result capture had errors");
    }

    let duration = input.finished_at - input.started_at;
    let meta = RunMeta {
        case_id: input.case_id.to_string(),
        run_id: input.run_id.to_string(),
        case_hash,
        outcome: input.outcome,
        start_time: input.started_at.to_rfc3339(),
        end_time: input.finished_at.to_rfc3339(),
        duration_secs: duration.num_milliseconds() as f64 / 1000.0,
        checks_total: input.judgment.checks.len(),
        checks_passed: input.judgment.passed_count(),
        errors,
    };

    write_meta(&results_dir.join("meta.json"), &meta)?;
    write_judgment(&results_dir.join("checks.json"), input.judgment)?;
    debug!(results_dir = %results_dir.display(), "results captured");
    Ok(results_dir)
}

pub fn results_dir(base_dir: &Path, case_id: &str, run_id: &str) -> PathBuf {
    base_dir.join(case_id).join(run_id)
}

pub fn write_meta(path: &Path, meta: &RunMeta) -> Result<()> {
    let contents = serde_json::to_string_pretty(meta).context("serialize meta")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write meta {}", path.display()))?;
    Ok(())
}

fn file_sha256(path: &Path) -> Result<String> {
    let contents = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}
