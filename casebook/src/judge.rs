//! Check execution and outcome recording.
//!
//! Runs each check in-process through `drills::cli`, sharing one session per
//! case, and records what was printed or which error was raised.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use drills::cli::{Cli, Session, execute, render_text};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::case::Check;

/// Collected check outcomes for a run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Judgment {
    pub checks: Vec<CheckOutcome>,
}

impl Judgment {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|check| check.passed()).count()
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    Output {
        args: Vec<String>,
        expected: String,
        actual: Option<String>,
        error: Option<String>,
        passed: bool,
    },
    Fails {
        args: Vec<String>,
        message: Option<String>,
        error: Option<String>,
        passed: bool,
    },
    /// The arguments did not parse; the case itself is broken.
    Usage { args: Vec<String>, message: String },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Output { passed, .. } | CheckOutcome::Fails { passed, .. } => *passed,
            CheckOutcome::Usage { .. } => false,
        }
    }

    /// Stable label for aggregating pass rates across runs.
    pub fn label(&self) -> String {
        match self {
            CheckOutcome::Output { args, .. } => format!("output({})", args.join(" ")),
            CheckOutcome::Fails { args, .. } => format!("fails({})", args.join(" ")),
            CheckOutcome::Usage { args, .. } => format!("usage({})", args.join(" ")),
        }
    }
}

enum Invocation {
    Printed(String),
    Failed(String),
    Usage(String),
}

/// Run all checks against one shared session and collect outcomes.
#[instrument(skip_all, fields(check_count = checks.len()))]
pub fn run_checks(checks: &[Check], session: &mut Session) -> Judgment {
    let mut outcomes = Vec::with_capacity(checks.len());
    for check in checks {
        let args = check.args().to_vec();
        let invocation = invoke(&args, session);
        let outcome = match (check, invocation) {
            (_, Invocation::Usage(message)) => CheckOutcome::Usage { args, message },
            (Check::Output { expected, .. }, Invocation::Printed(actual)) => {
                let passed = actual.trim() == expected.trim();
                CheckOutcome::Output {
                    args,
                    expected: expected.clone(),
                    actual: Some(actual),
                    error: None,
                    passed,
                }
            }
            (Check::Output { expected, .. }, Invocation::Failed(error)) => CheckOutcome::Output {
                args,
                expected: expected.clone(),
                actual: None,
                error: Some(error),
                passed: false,
            },
            (Check::Fails { message, .. }, Invocation::Printed(_)) => CheckOutcome::Fails {
                args,
                message: message.clone(),
                error: None,
                passed: false,
            },
            (Check::Fails { message, .. }, Invocation::Failed(error)) => {
                let passed = message
                    .as_deref()
                    .is_none_or(|expected| error.contains(expected));
                CheckOutcome::Fails {
                    args,
                    message: message.clone(),
                    error: Some(error),
                    passed,
                }
            }
        };
        debug!(label = %outcome.label(), passed = outcome.passed(), "check finished");
        outcomes.push(outcome);
    }
    Judgment { checks: outcomes }
}

fn invoke(args: &[String], session: &mut Session) -> Invocation {
    let argv = std::iter::once("drills").chain(args.iter().map(String::as_str));
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => return Invocation::Usage(err.to_string().trim().to_string()),
    };
    let value = match execute(&cli.command, session) {
        Ok(value) => value,
        Err(err) => return Invocation::Failed(format!("{err:#}")),
    };
    if cli.json {
        match serde_json::to_string_pretty(&value) {
            Ok(text) => Invocation::Printed(text),
            Err(err) => Invocation::Failed(format!("serialize json: {err}")),
        }
    } else {
        Invocation::Printed(render_text(&value))
    }
}

pub fn write_judgment(path: &Path, judgment: &Judgment) -> Result<()> {
    let contents = serde_json::to_string_pretty(judgment).context("serialize checks")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write checks {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    fn output(raw: &[&str], expected: &str) -> Check {
        Check::Output {
            args: args(raw),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn output_checks_compare_trimmed_text() {
        let checks = vec![
            output(&["pig-latin", "square"], "aresquay"),
            output(&["pig-latin", "square"], "  aresquay\n"),
            output(&["pig-latin", "pig"], "pigay"),
        ];
        let judgment = run_checks(&checks, &mut Session::default());
        let passed: Vec<bool> = judgment.checks.iter().map(CheckOutcome::passed).collect();
        assert_eq!(passed, vec![true, true, false]);
        assert_eq!(judgment.passed_count(), 2);
    }

    #[test]
    fn output_check_fails_on_error() {
        let checks = vec![output(&["grains", "square", "0"], "0")];
        let judgment = run_checks(&checks, &mut Session::default());
        match &judgment.checks[0] {
            CheckOutcome::Output {
                error: Some(error),
                passed,
                ..
            } => {
                assert!(!passed);
                assert!(error.contains("square must be between 1 and 64"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn fails_checks_match_error_message() {
        let checks = vec![
            Check::Fails {
                args: args(&["collatz", "0"]),
                message: Some("positive".to_string()),
            },
            Check::Fails {
                args: args(&["collatz", "0"]),
                message: Some("overflow".to_string()),
            },
            Check::Fails {
                args: args(&["collatz", "1"]),
                message: None,
            },
        ];
        let judgment = run_checks(&checks, &mut Session::default());
        let passed: Vec<bool> = judgment.checks.iter().map(CheckOutcome::passed).collect();
        assert_eq!(passed, vec![true, false, false]);
    }

    #[test]
    fn unparseable_args_are_usage_errors() {
        let checks = vec![output(&["no-such-exercise"], "")];
        let judgment = run_checks(&checks, &mut Session::default());
        assert!(matches!(judgment.checks[0], CheckOutcome::Usage { .. }));
        assert_eq!(judgment.checks[0].label(), "usage(no-such-exercise)");
    }

    #[test]
    fn shipped_cases_pass() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cases");
        let cases = crate::case::discover_cases(&dir).expect("discover cases");
        assert!(!cases.is_empty());
        for case in cases {
            let config = crate::config::apply_case_config(Default::default(), &case.config)
                .expect("case config");
            let judgment = run_checks(&case.checks, &mut Session::new(config));
            let failed: Vec<&CheckOutcome> =
                judgment.checks.iter().filter(|check| !check.passed()).collect();
            assert!(failed.is_empty(), "{}: {failed:?}", case.case.id);
        }
    }

    #[test]
    fn json_flag_is_honoured() {
        let checks = vec![output(&["--json", "raindrops", "15"], "\"PlingPlang\"")];
        let judgment = run_checks(&checks, &mut Session::default());
        assert!(judgment.checks[0].passed());
    }
}
