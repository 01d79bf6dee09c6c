//! Currency exchange arithmetic for travellers.
//!
//! Denominations are whole currency units and must be non-zero. Results that
//! would be infinite, NaN or wrap around are reported as errors.

use crate::core::error::{ExerciseError, Result};

/// Bill counts must stay below 2^64 to fit in a `u64`.
const BILL_COUNT_LIMIT: f64 = u64::MAX as f64;

pub fn exchange_money(budget: f64, exchange_rate: f64) -> Result<f64> {
    if exchange_rate.is_nan() || exchange_rate <= 0.0 {
        return Err(ExerciseError::NonPositive {
            what: "exchange rate",
        });
    }
    finite(budget / exchange_rate, "exchanged amount")
}

pub fn get_change(budget: f64, exchanging_value: f64) -> Result<f64> {
    finite(budget - exchanging_value, "change")
}

pub fn get_value_of_bills(denomination: u64, number_of_bills: u64) -> Result<u64> {
    denomination
        .checked_mul(number_of_bills)
        .ok_or(ExerciseError::Overflow("bill value"))
}

/// Whole bills obtainable for `amount`, truncated.
pub fn get_number_of_bills(amount: f64, denomination: u64) -> Result<u64> {
    if denomination == 0 {
        return Err(ExerciseError::NonPositive {
            what: "denomination",
        });
    }
    let bills = (amount / denomination as f64).trunc();
    if !bills.is_finite() || bills < 0.0 || bills >= BILL_COUNT_LIMIT {
        return Err(ExerciseError::Overflow("bill count"));
    }
    Ok(bills as u64)
}

/// Amount left after taking out whole bills.
pub fn get_leftover_of_bills(amount: f64, denomination: u64) -> Result<f64> {
    if denomination == 0 {
        return Err(ExerciseError::NonPositive {
            what: "denomination",
        });
    }
    finite(amount.rem_euclid(denomination as f64), "leftover")
}

/// Value in whole bills after exchanging `budget` at `exchange_rate` raised by
/// `spread_pct` percent.
pub fn exchangeable_value(
    budget: f64,
    exchange_rate: f64,
    spread_pct: f64,
    denomination: u64,
) -> Result<u64> {
    let actual_rate = exchange_rate + exchange_rate * spread_pct / 100.0;
    let exchanged = exchange_money(budget, actual_rate)?;
    get_value_of_bills(denomination, get_number_of_bills(exchanged, denomination)?)
}

fn finite(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExerciseError::Overflow(what))
    }
}
