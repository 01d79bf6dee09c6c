use serde::{Deserialize, Serialize};

use crate::judge::{CheckOutcome, Judgment};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Fail,
    Error,
}

/// `Error` if any check could not be parsed, else `Success` when every check passed.
pub fn classify_outcome(judgment: &Judgment) -> Outcome {
    if judgment
        .checks
        .iter()
        .any(|check| matches!(check, CheckOutcome::Usage { .. }))
    {
        return Outcome::Error;
    }
    if judgment.checks.iter().all(CheckOutcome::passed) {
        Outcome::Success
    } else {
        Outcome::Fail
    }
}
