//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::case::{CaseFile, discover_cases, validate_case_id};
use crate::report::aggregate;
use crate::run::run_case;

fn cases_dir(repo_root: &Path) -> PathBuf {
    repo_root.join("casebook").join("cases")
}

fn results_base(repo_root: &Path) -> PathBuf {
    repo_root.join("casebook").join("results")
}

/// List all available cases.
pub fn list_cases(repo_root: &Path) -> Result<()> {
    let cases = discover_cases(&cases_dir(repo_root))?;
    for case in cases {
        println!("{}\t{}", case.case.id, case.checks.len());
    }
    Ok(())
}

/// Run a case by id (optionally multiple times).
pub fn run_case_by_id(repo_root: &Path, case_id: &str, runs: u32) -> Result<()> {
    validate_case_id(case_id)?;
    let case_path = cases_dir(repo_root).join(format!("{case_id}.toml"));
    if !case_path.exists() {
        bail!("case {} not found at {}", case_id, case_path.display());
    }
    let case = CaseFile::load(&case_path).context("load case")?;
    debug!(case_id, runs, "case loaded");

    info!(case_id, runs, "starting runs");
    let results_base = results_base(repo_root);
    for run_num in 1..=runs {
        let outcome = run_case(&results_base, &case_path, &case, run_num).context("run case")?;
        println!(
            "run: case={} run_id={} outcome={:?} checks={}/{} results={}",
            case_id,
            outcome.run_id,
            outcome.outcome,
            outcome.checks_passed,
            outcome.checks_total,
            outcome.results_dir.display()
        );
    }
    Ok(())
}

/// Show aggregated results for a case.
pub fn report_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let (summary, warnings) = aggregate(&results_base(repo_root).join(case_id))?;
    println!("report: case={} runs={}", case_id, summary.runs);
    println!(
        "report: success={} fail={} error={}",
        summary.success, summary.fail, summary.error
    );
    if let Some(avg) = summary.avg_duration_secs {
        println!("report: avg_duration_secs={avg:.3}");
    }
    for (label, (passed, total)) in summary.check_pass_rates {
        println!("report: check {label} {passed}/{total}");
    }
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

/// Remove recorded results for a case.
pub fn clean_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let case_results = results_base(repo_root).join(case_id);
    if case_results.exists() {
        std::fs::remove_dir_all(&case_results)
            .with_context(|| format!("remove {}", case_results.display()))?;
    }
    println!("clean: case={} results={}", case_id, case_results.display());
    Ok(())
}
