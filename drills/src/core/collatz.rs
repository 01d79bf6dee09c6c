//! Collatz step counting, with an optional caller-owned memo.

use std::collections::HashMap;

use crate::core::error::{ExerciseError, Result};

/// Number of steps needed to reach 1 from `number`.
pub fn steps(number: u64) -> Result<u64> {
    CollatzCache::new().steps(number)
}

/// Memo of start value to step count.
///
/// The cache belongs to whoever wants memoization across calls (for example
/// one CLI session); nothing in this module keeps state of its own.
#[derive(Debug, Clone, Default)]
pub struct CollatzCache {
    memo: HashMap<u64, u64>,
}

impl CollatzCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count steps for `number`, reusing and extending the memo.
    ///
    /// The walk stops early when it reaches any value already memoized.
    pub fn steps(&mut self, number: u64) -> Result<u64> {
        if number == 0 {
            return Err(ExerciseError::NonPositive {
                what: "collatz start value",
            });
        }
        if let Some(&known) = self.memo.get(&number) {
            return Ok(known);
        }

        let mut current = number;
        let mut loops = 0u64;
        while current != 1 {
            current = next(current)?;
            loops += 1;
            if let Some(&known) = self.memo.get(&current) {
                loops += known;
                break;
            }
        }

        self.memo.insert(number, loops);
        Ok(loops)
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn clear(&mut self) {
        self.memo.clear();
    }
}

fn next(current: u64) -> Result<u64> {
    if current % 2 == 0 {
        Ok(current / 2)
    } else {
        current
            .checked_mul(3)
            .and_then(|tripled| tripled.checked_add(1))
            .ok_or(ExerciseError::Overflow("collatz step"))
    }
}
