//! Drills configuration merging.
//!
//! Applies case-specific overrides to the default drills configuration.

use anyhow::Result;
use drills::io::config::DrillsConfig;

use crate::case::CaseConfig;

/// Apply case configuration overrides to the base drills config.
pub fn apply_case_config(mut base: DrillsConfig, overrides: &CaseConfig) -> Result<DrillsConfig> {
    if let Some(reactor) = &overrides.reactor {
        base.reactor = reactor.clone();
    }
    if let Some(lasagna) = overrides.lasagna {
        base.lasagna = lasagna;
    }
    base.validate()?;
    Ok(base)
}
