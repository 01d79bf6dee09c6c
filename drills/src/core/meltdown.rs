//! Reactor safety rule tables.
//!
//! Each table is a plain serde struct so thresholds can be overridden from
//! `drills.toml`. `Default` carries the standard values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{ExerciseError, Result};

/// Limits for a balanced (critical) reactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalityConditions {
    pub critical_temperature_limit: f64,
    pub min_neutrons_emitted_per_second: f64,
    pub max_product_temperature_neutrons: f64,
}

impl Default for CriticalityConditions {
    fn default() -> Self {
        Self {
            critical_temperature_limit: 800.0,
            min_neutrons_emitted_per_second: 500.0,
            max_product_temperature_neutrons: 500_000.0,
        }
    }
}

impl CriticalityConditions {
    pub fn is_balanced(&self, temperature: f64, neutrons_emitted: f64) -> bool {
        temperature < self.critical_temperature_limit
            && neutrons_emitted > self.min_neutrons_emitted_per_second
            && temperature * neutrons_emitted < self.max_product_temperature_neutrons
    }
}

/// Named efficiency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyZone {
    Green,
    Orange,
    Red,
    Black,
}

impl fmt::Display for EfficiencyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EfficiencyZone::Green => "green",
            EfficiencyZone::Orange => "orange",
            EfficiencyZone::Red => "red",
            EfficiencyZone::Black => "black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyBand {
    /// Minimum efficiency percentage (inclusive).
    pub threshold: f64,
    pub zone: EfficiencyZone,
}

/// Efficiency bands in descending threshold order plus a fallback zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyZones {
    /// Zone used when no band threshold is reached.
    pub fallback: EfficiencyZone,
    pub bands: Vec<EfficiencyBand>,
}

impl Default for EfficiencyZones {
    fn default() -> Self {
        Self {
            fallback: EfficiencyZone::Black,
            bands: vec![
                EfficiencyBand {
                    threshold: 80.0,
                    zone: EfficiencyZone::Green,
                },
                EfficiencyBand {
                    threshold: 60.0,
                    zone: EfficiencyZone::Orange,
                },
                EfficiencyBand {
                    threshold: 30.0,
                    zone: EfficiencyZone::Red,
                },
            ],
        }
    }
}

impl EfficiencyZones {
    /// First band whose threshold `efficiency_pct` reaches, else the fallback.
    pub fn zone_for(&self, efficiency_pct: f64) -> EfficiencyZone {
        self.bands
            .iter()
            .find(|band| efficiency_pct >= band.threshold)
            .map_or(self.fallback, |band| band.zone)
    }
}

/// Fail-safe status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    Low,
    Normal,
    Danger,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusLevel::Low => "LOW",
            StatusLevel::Normal => "NORMAL",
            StatusLevel::Danger => "DANGER",
        })
    }
}

/// Fractions of the fail-safe threshold bounding the `NORMAL` window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBands {
    pub low_factor: f64,
    pub high_factor: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            low_factor: 0.9,
            high_factor: 1.1,
        }
    }
}

impl StatusBands {
    pub fn assess(&self, product: f64, threshold: f64) -> StatusLevel {
        if product < threshold * self.low_factor {
            StatusLevel::Low
        } else if product <= threshold * self.high_factor {
            StatusLevel::Normal
        } else {
            StatusLevel::Danger
        }
    }
}

/// Full rule set for one reactor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reactor {
    pub criticality: CriticalityConditions,
    pub efficiency: EfficiencyZones,
    pub status: StatusBands,
}

impl Reactor {
    pub fn is_criticality_balanced(&self, temperature: f64, neutrons_emitted: f64) -> bool {
        self.criticality.is_balanced(temperature, neutrons_emitted)
    }

    /// Zone for the generated power as a percentage of `theoretical_max_power`.
    pub fn reactor_efficiency(
        &self,
        voltage: f64,
        current: f64,
        theoretical_max_power: f64,
    ) -> Result<EfficiencyZone> {
        if theoretical_max_power <= 0.0 {
            return Err(ExerciseError::NonPositive {
                what: "theoretical max power",
            });
        }
        let efficiency_pct = voltage * current / theoretical_max_power * 100.0;
        Ok(self.efficiency.zone_for(efficiency_pct))
    }

    pub fn fail_safe(
        &self,
        temperature: f64,
        neutrons_produced_per_second: f64,
        threshold: f64,
    ) -> StatusLevel {
        self.status
            .assess(temperature * neutrons_produced_per_second, threshold)
    }

    /// Check table consistency; returns stable error messages.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self
            .efficiency
            .bands
            .windows(2)
            .any(|pair| pair[0].threshold <= pair[1].threshold)
        {
            errors.push("efficiency bands must have strictly descending thresholds".to_string());
        }
        if self.status.low_factor > self.status.high_factor {
            errors.push(format!(
                "status low_factor {} exceeds high_factor {}",
                self.status.low_factor, self.status.high_factor
            ));
        }
        errors
    }
}

pub fn is_criticality_balanced(temperature: f64, neutrons_emitted: f64) -> bool {
    Reactor::default().is_criticality_balanced(temperature, neutrons_emitted)
}

pub fn reactor_efficiency(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> Result<EfficiencyZone> {
    Reactor::default().reactor_efficiency(voltage, current, theoretical_max_power)
}

pub fn fail_safe(temperature: f64, neutrons_produced_per_second: f64, threshold: f64) -> StatusLevel {
    Reactor::default().fail_safe(temperature, neutrons_produced_per_second, threshold)
}
