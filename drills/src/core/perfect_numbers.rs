//! Nicomachus classification by aliquot sum.

use std::fmt;

use serde::Serialize;

use crate::core::error::{ExerciseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Perfect,
    Abundant,
    Deficient,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Perfect => "perfect",
            Classification::Abundant => "abundant",
            Classification::Deficient => "deficient",
        })
    }
}

pub fn classify(number: u64) -> Result<Classification> {
    if number == 0 {
        return Err(ExerciseError::NonPositive {
            what: "classified number",
        });
    }
    let sum = aliquot_sum(number);
    Ok(match sum.cmp(&number) {
        std::cmp::Ordering::Equal => Classification::Perfect,
        std::cmp::Ordering::Greater => Classification::Abundant,
        std::cmp::Ordering::Less => Classification::Deficient,
    })
}

/// Sum of divisors of `number` excluding itself. Divisor pairs are collected
/// by trial division up to the square root.
pub fn aliquot_sum(number: u64) -> u64 {
    if number <= 1 {
        return 0;
    }
    let mut sum = 1;
    let mut divisor = 2;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            sum += divisor;
            let pair = number / divisor;
            if pair != divisor {
                sum += pair;
            }
        }
        divisor += 1;
    }
    sum
}
