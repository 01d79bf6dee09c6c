//! Drills configuration stored in `drills.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::lasagna::LasagnaTimes;
use crate::core::meltdown::Reactor;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "drills.toml";

/// Overridable exercise constants (TOML).
///
/// Missing sections and fields fall back to the standard exercise values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrillsConfig {
    /// Reactor criticality, efficiency and fail-safe tables.
    pub reactor: Reactor,

    pub lasagna: LasagnaTimes,
}

impl DrillsConfig {
    pub fn validate(&self) -> Result<()> {
        let errors = self.reactor.validate();
        if !errors.is_empty() {
            bail!("invalid reactor config:\n- {}", errors.join("\n- "));
        }
        if self.lasagna.expected_bake_time <= 0 {
            bail!("lasagna.expected_bake_time must be > 0");
        }
        if self.lasagna.preparation_time_per_layer <= 0 {
            bail!("lasagna.preparation_time_per_layer must be > 0");
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DrillsConfig::default()`.
pub fn load_config(path: &Path) -> Result<DrillsConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DrillsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DrillsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DrillsConfig) -> Result<()> {
    cfg.validate()?;
    write_atomic(path, &render_config(cfg)?)
}

/// Serialize config as pretty TOML with trailing newline.
pub fn render_config(cfg: &DrillsConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::meltdown::EfficiencyZone;
    use crate::test_support::write_config_fixture;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DrillsConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("drills.toml");
        let mut cfg = DrillsConfig::default();
        cfg.lasagna.expected_bake_time = 55;
        cfg.reactor.efficiency.fallback = EfficiencyZone::Red;
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_temp, path) = write_config_fixture(
            r#"
[lasagna]
preparation_time_per_layer = 5

[reactor.criticality]
critical_temperature_limit = 900.0
"#,
        );
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.lasagna.preparation_time_per_layer, 5);
        assert_eq!(cfg.lasagna.expected_bake_time, 40);
        assert_eq!(cfg.reactor.criticality.critical_temperature_limit, 900.0);
        assert_eq!(cfg.reactor.criticality.min_neutrons_emitted_per_second, 500.0);
        assert_eq!(cfg.reactor.efficiency.bands.len(), 3);
    }

    #[test]
    fn custom_efficiency_bands_parse() {
        let (_temp, path) = write_config_fixture(
            r#"
[reactor.efficiency]
fallback = "red"

[[reactor.efficiency.bands]]
threshold = 50.0
zone = "green"
"#,
        );
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.reactor.efficiency.zone_for(49.0), EfficiencyZone::Red);
        assert_eq!(cfg.reactor.efficiency.zone_for(50.0), EfficiencyZone::Green);
    }

    #[test]
    fn rejects_unordered_bands() {
        let (_temp, path) = write_config_fixture(
            r#"
[[reactor.efficiency.bands]]
threshold = 30.0
zone = "red"

[[reactor.efficiency.bands]]
threshold = 80.0
zone = "green"
"#,
        );
        let err = load_config(&path).expect_err("unordered bands");
        assert!(format!("{err:#}").contains("descending"));
    }

    #[test]
    fn rejects_non_positive_lasagna_times() {
        let mut cfg = DrillsConfig::default();
        cfg.lasagna.preparation_time_per_layer = 0;
        let err = cfg.validate().expect_err("invalid");
        assert!(err.to_string().contains("preparation_time_per_layer"));
    }
}
