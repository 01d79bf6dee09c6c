//! Case file parsing and validation.
//!
//! Cases are TOML files listing `drills` invocations and their expected
//! results. See `casebook/cases/` for examples.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use drills::core::lasagna::LasagnaTimes;
use drills::core::meltdown::Reactor;
use serde::Deserialize;

/// A parsed case file containing metadata, config overrides, and checks.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CaseFile {
    pub case: CaseMeta,
    #[serde(default)]
    pub config: CaseConfig,
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Case metadata: identifier and description.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// Exercise constant overrides for the case.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CaseConfig {
    pub reactor: Option<Reactor>,
    pub lasagna: Option<LasagnaTimes>,
}

/// One `drills` invocation and what it should produce.
///
/// `args` exclude the binary name, e.g. `["pig-latin", "square"]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// The command succeeds and prints exactly `expected` (surrounding whitespace ignored).
    Output { args: Vec<String>, expected: String },
    /// The command fails; if `message` is set the error must contain it.
    Fails {
        args: Vec<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        let case: CaseFile =
            toml::from_str(&contents).with_context(|| format!("parse case {}", path.display()))?;
        case.validate()
            .with_context(|| format!("validate case {}", path.display()))?;
        Ok(case)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        for (index, check) in self.checks.iter().enumerate() {
            check
                .validate()
                .with_context(|| format!("checks[{}] invalid", index))?;
        }
        Ok(())
    }
}

impl Check {
    pub fn args(&self) -> &[String] {
        match self {
            Check::Output { args, .. } | Check::Fails { args, .. } => args,
        }
    }

    fn validate(&self) -> Result<()> {
        let args = self.args();
        if args.is_empty() || args[0].trim().is_empty() {
            bail!("args must be a non-empty array starting with a subcommand");
        }
        if let Check::Fails {
            message: Some(message),
            ..
        } = self
            && message.trim().is_empty()
        {
            bail!("fails.message must be non-empty when set");
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns cases sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<CaseFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        cases.push(CaseFile::load(&path)?);
    }
    cases.sort_by(|left, right| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].case.id == pair[1].case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].case.id));
        }
    }
    Ok(cases)
}

pub fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_case() {
        let input = r#"
[case]
id = "pig-latin"
description = "rule priority"

[config.lasagna]
expected_bake_time = 50

[[checks]]
type = "output"
args = ["pig-latin", "square"]
expected = "aresquay"

[[checks]]
type = "fails"
args = ["collatz", "0"]
message = "positive"
"#;
        let case = CaseFile::parse_str(input).expect("case parses");
        assert_eq!(case.case.id, "pig-latin");
        assert_eq!(case.checks.len(), 2);
        assert_eq!(case.checks[1].args(), ["collatz", "0"]);
        let lasagna = case.config.lasagna.expect("lasagna override");
        assert_eq!(lasagna.expected_bake_time, 50);
        assert_eq!(lasagna.preparation_time_per_layer, 2);
        assert!(case.config.reactor.is_none());
    }

    #[test]
    fn rejects_invalid_id() {
        let input = r#"
[case]
id = "bad/id"

[[checks]]
type = "output"
args = ["raindrops", "3"]
expected = "Pling"
"#;
        let err = CaseFile::parse_str(input).expect_err("invalid id");
        assert!(err.to_string().contains("case.id"));
    }

    #[test]
    fn rejects_empty_args() {
        let input = r#"
[case]
id = "empty"

[[checks]]
type = "fails"
args = []
"#;
        let _err = CaseFile::parse_str(input).expect_err("invalid check");
    }

    #[test]
    fn rejects_missing_checks() {
        let input = r#"
[case]
id = "nothing"
"#;
        let err = CaseFile::parse_str(input).expect_err("no checks");
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn discovers_cases_sorted_and_unique() {
        let temp = tempfile::tempdir().expect("tempdir");
        let body = |id: &str| {
            format!(
                "[case]\nid = \"{id}\"\n\n[[checks]]\ntype = \"output\"\nargs = [\"raindrops\", \"1\"]\nexpected = \"1\"\n"
            )
        };
        fs::write(temp.path().join("b.toml"), body("beta")).expect("write");
        fs::write(temp.path().join("a.toml"), body("alpha")).expect("write");
        fs::write(temp.path().join("notes.md"), "ignored").expect("write");

        let cases = discover_cases(temp.path()).expect("discover");
        let ids: Vec<&str> = cases.iter().map(|case| case.case.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);

        fs::write(temp.path().join("c.toml"), body("alpha")).expect("write");
        let err = discover_cases(temp.path()).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate"));
    }
}
