//! Lasagna cooking times.

use serde::{Deserialize, Serialize};

use crate::core::error::{ExerciseError, Result};

/// Kitchen constants, overridable from `drills.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LasagnaTimes {
    /// Minutes the lasagna should spend in the oven.
    pub expected_bake_time: i64,
    /// Minutes of preparation per layer.
    pub preparation_time_per_layer: i64,
}

impl Default for LasagnaTimes {
    fn default() -> Self {
        Self {
            expected_bake_time: 40,
            preparation_time_per_layer: 2,
        }
    }
}

impl LasagnaTimes {
    /// Oven minutes left; negative once the lasagna is overdone.
    pub fn bake_time_remaining(&self, elapsed_bake_time: i64) -> Result<i64> {
        self.expected_bake_time
            .checked_sub(elapsed_bake_time)
            .ok_or(ExerciseError::Overflow("bake time remaining"))
    }

    pub fn preparation_time_in_minutes(&self, number_of_layers: i64) -> Result<i64> {
        number_of_layers
            .checked_mul(self.preparation_time_per_layer)
            .ok_or(ExerciseError::Overflow("preparation time"))
    }

    /// Preparation plus baking so far.
    pub fn elapsed_time_in_minutes(
        &self,
        number_of_layers: i64,
        elapsed_bake_time: i64,
    ) -> Result<i64> {
        self.preparation_time_in_minutes(number_of_layers)?
            .checked_add(elapsed_bake_time)
            .ok_or(ExerciseError::Overflow("elapsed time"))
    }
}

pub fn bake_time_remaining(elapsed_bake_time: i64) -> Result<i64> {
    LasagnaTimes::default().bake_time_remaining(elapsed_bake_time)
}

pub fn preparation_time_in_minutes(number_of_layers: i64) -> Result<i64> {
    LasagnaTimes::default().preparation_time_in_minutes(number_of_layers)
}

pub fn elapsed_time_in_minutes(number_of_layers: i64, elapsed_bake_time: i64) -> Result<i64> {
    LasagnaTimes::default().elapsed_time_in_minutes(number_of_layers, elapsed_bake_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_times() {
        assert_eq!(bake_time_remaining(25), Ok(15));
        assert_eq!(bake_time_remaining(45), Ok(-5));
        assert_eq!(preparation_time_in_minutes(4), Ok(8));
        assert_eq!(elapsed_time_in_minutes(3, 20), Ok(26));
    }

    #[test]
    fn custom_times_scale_per_layer() {
        let times = LasagnaTimes {
            expected_bake_time: 50,
            preparation_time_per_layer: 3,
        };
        assert_eq!(times.bake_time_remaining(10), Ok(40));
        assert_eq!(times.elapsed_time_in_minutes(2, 10), Ok(16));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            preparation_time_in_minutes(i64::MAX),
            Err(ExerciseError::Overflow("preparation time"))
        );
        assert_eq!(preparation_time_in_minutes(i64::MAX / 2), Ok(i64::MAX - 1));
        assert_eq!(
            bake_time_remaining(i64::MIN),
            Err(ExerciseError::Overflow("bake time remaining"))
        );
        assert_eq!(
            elapsed_time_in_minutes(1, i64::MAX),
            Err(ExerciseError::Overflow("elapsed time"))
        );
        assert_eq!(elapsed_time_in_minutes(0, i64::MAX), Ok(i64::MAX));
    }
}
