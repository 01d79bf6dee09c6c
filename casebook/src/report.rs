use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::judge::Judgment;
use crate::outcome::Outcome;
use crate::results::RunMeta;

#[derive(Debug, Default)]
pub struct ReportSummary {
    pub runs: usize,
    pub success: usize,
    pub fail: usize,
    pub error: usize,
    pub avg_duration_secs: Option<f64>,
    pub check_pass_rates: BTreeMap<String, (usize, usize)>,
}

pub fn load_run_dirs(case_results_dir: &Path) -> Result<Vec<PathBuf>> {
    if !case_results_dir.exists() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    for entry in fs::read_dir(case_results_dir)
        .with_context(|| format!("read {}", case_results_dir.display()))?
    {
        let entry = entry.context("read entry")?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

pub fn aggregate(case_results_dir: &Path) -> Result<(ReportSummary, Vec<String>)> {
    let mut summary = ReportSummary::default();
    let mut warnings = Vec::new();

    for run_dir in load_run_dirs(case_results_dir)? {
        let meta_path = run_dir.join("meta.json");
        let checks_path = run_dir.join("checks.json");

        let meta: RunMeta = match fs::read_to_string(&meta_path)
            .with_context(|| format!("read {}", meta_path.display()))
            .and_then(|contents| serde_json::from_str(&contents).context("parse meta"))
        {
            Ok(meta) => meta,
            Err(err) => {
                warnings.push(format!(
                    "skip {}: meta.json invalid ({err})",
                    run_dir.display()
                ));
                continue;
            }
        };

        let judgment: Judgment = match fs::read_to_string(&checks_path)
            .with_context(|| format!("read {}", checks_path.display()))
            .and_then(|contents| serde_json::from_str(&contents).context("parse checks"))
        {
            Ok(checks) => checks,
            Err(err) => {
                warnings.push(format!(
                    "skip {}: checks.json invalid ({err})",
                    run_dir.display()
                ));
                continue;
            }
        };

        summary.runs += 1;
        match meta.outcome {
            Outcome::Success => summary.success += 1,
            Outcome::Fail => summary.fail += 1,
            Outcome::Error => summary.error += 1,
        }

        summary.avg_duration_secs = Some(match summary.avg_duration_secs {
            None => meta.duration_secs,
            Some(avg) => {
                let total = avg * (summary.runs as f64 - 1.0) + meta.duration_secs;
                total / summary.runs as f64
            }
        });

        update_check_pass_rates(&mut summary.check_pass_rates, &judgment);
    }

    Ok((summary, warnings))
}

fn update_check_pass_rates(stats: &mut BTreeMap<String, (usize, usize)>, judgment: &Judgment) {
    for check in &judgment.checks {
        let entry = stats.entry(check.label()).or_insert((0, 0));
        if check.passed() {
            entry.0 += 1;
        }
        entry.1 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::{CheckOutcome, write_judgment};
    use crate::results::write_meta;
    use tempfile::tempdir;

    fn meta(outcome: Outcome, duration: f64) -> RunMeta {
        RunMeta {
            case_id: "case".to_string(),
            run_id: "run".to_string(),
            case_hash: "hash".to_string(),
            outcome,
            start_time: "now".to_string(),
            end_time: "later".to_string(),
            duration_secs: duration,
            checks_total: 1,
            checks_passed: 0,
            errors: Vec::new(),
        }
    }

    fn judgment(passed: bool) -> Judgment {
        Judgment {
            checks: vec![CheckOutcome::Output {
                args: vec!["pig-latin".to_string(), "pig".to_string()],
                expected: "igpay".to_string(),
                actual: Some(if passed { "igpay" } else { "pigay" }.to_string()),
                error: None,
                passed,
            }],
        }
    }

    #[test]
    fn aggregates_runs() {
        let temp = tempdir().expect("tempdir");
        let run1 = temp.path().join("run1");
        let run2 = temp.path().join("run2");
        fs::create_dir_all(&run1).expect("run1");
        fs::create_dir_all(&run2).expect("run2");

        write_meta(&run1.join("meta.json"), &meta(Outcome::Success, 0.5)).expect("meta");
        write_judgment(&run1.join("checks.json"), &judgment(true)).expect("checks");

        write_meta(&run2.join("meta.json"), &meta(Outcome::Fail, 1.5)).expect("meta");
        write_judgment(&run2.join("checks.json"), &judgment(false)).expect("checks");

        let (summary, warnings) = aggregate(temp.path()).expect("aggregate");
        assert!(warnings.is_empty());
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.fail, 1);
        assert_eq!(summary.avg_duration_secs, Some(1.0));

        let key = "output(pig-latin pig)".to_string();
        assert_eq!(summary.check_pass_rates.get(&key), Some(&(1, 2)));
    }

    #[test]
    fn invalid_runs_become_warnings() {
        let temp = tempdir().expect("tempdir");
        let run = temp.path().join("run1");
        fs::create_dir_all(&run).expect("run");
        fs::write(run.join("meta.json"), "not json").expect("meta");

        let (summary, warnings) = aggregate(temp.path()).expect("aggregate");
        assert_eq!(summary.runs, 0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("meta.json invalid"));
    }

    #[test]
    fn missing_results_dir_is_empty_report() {
        let temp = tempdir().expect("tempdir");
        let (summary, warnings) = aggregate(&temp.path().join("none")).expect("aggregate");
        assert_eq!(summary.runs, 0);
        assert!(warnings.is_empty());
    }
}
