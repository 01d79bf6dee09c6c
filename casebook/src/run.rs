//! Case execution orchestration.
//!
//! Builds the session from case overrides, runs the checks, and captures results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use drills::cli::Session;
use drills::io::config::DrillsConfig;
use tracing::{debug, info, instrument};

use crate::case::CaseFile;
use crate::config::apply_case_config;
use crate::judge::run_checks;
use crate::outcome::{Outcome, classify_outcome};
use crate::results::{CaptureInput, capture_results};

/// Result of running a single case.
#[derive(Debug)]
pub struct RunOutcome {
    /// Unique identifier for this run.
    pub run_id: String,
    /// Path to the results directory.
    pub results_dir: PathBuf,
    pub outcome: Outcome,
    pub checks_passed: usize,
    pub checks_total: usize,
}

/// Run every check of a case in a fresh session and record the results.
#[instrument(skip_all, fields(case_id = %case.case.id, run_num))]
pub fn run_case(
    results_base: &Path,
    case_path: &Path,
    case: &CaseFile,
    run_num: u32,
) -> Result<RunOutcome> {
    info!("case run started");

    let config = apply_case_config(DrillsConfig::default(), &case.config)
        .context("apply case config")?;
    let mut session = Session::new(config);

    let started_at = Utc::now();
    let run_id = run_id(started_at, run_num);
    debug!(run_id, "running checks");
    let judgment = run_checks(&case.checks, &mut session);
    let finished_at = Utc::now();

    let outcome = classify_outcome(&judgment);
    let input = CaptureInput {
        case_id: &case.case.id,
        case_path,
        run_id: &run_id,
        outcome,
        judgment: &judgment,
        started_at,
        finished_at,
    };
    let results_dir = capture_results(results_base, &input).context("capture results")?;

    info!(outcome = ?outcome, results_dir = %results_dir.display(), "case run complete");

    Ok(RunOutcome {
        run_id,
        results_dir,
        outcome,
        checks_passed: judgment.passed_count(),
        checks_total: judgment.checks.len(),
    })
}

fn run_id(started_at: chrono::DateTime<Utc>, run_num: u32) -> String {
    format!("run-{}-{run_num}", started_at.format("%Y%m%d_%H%M%S_%3f"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CASE: &str = r#"
[case]
id = "smoke"

[config.lasagna]
expected_bake_time = 60

[[checks]]
type = "output"
args = ["lasagna", "remaining", "20"]
expected = "40"

[[checks]]
type = "output"
args = ["collatz", "6", "12"]
expected = "number=6 steps=8\nnumber=12 steps=9"
"#;

    #[test]
    fn run_id_format() {
        let id = run_id(Utc::now(), 3);
        assert!(id.starts_with("run-"));
        assert!(id.ends_with("-3"));
    }

    #[test]
    fn runs_case_with_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let case_path = temp.path().join("smoke.toml");
        fs::write(&case_path, CASE).expect("write case");
        let case = CaseFile::load(&case_path).expect("load case");

        let outcome = run_case(&temp.path().join("results"), &case_path, &case, 1).expect("run");
        assert_eq!(outcome.outcome, Outcome::Success);
        assert_eq!(outcome.checks_passed, 2);
        assert!(outcome.results_dir.join("meta.json").exists());
        assert!(outcome.results_dir.join("checks.json").exists());
    }
}
