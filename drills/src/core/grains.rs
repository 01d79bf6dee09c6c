//! Grains of wheat doubling across a chessboard.

use crate::core::error::{ExerciseError, Result};

pub const BOARD_SQUARES: u32 = 64;

/// Grains on square `number` (1-based).
pub fn square(number: u32) -> Result<u64> {
    check_square(number, "square")?;
    Ok(1u64 << (number - 1))
}

/// Grains on the whole board.
pub fn total() -> u64 {
    u64::MAX
}

/// Grains on the first `board_size` squares.
pub fn total_for(board_size: u32) -> Result<u64> {
    check_square(board_size, "board size")?;
    Ok(u64::MAX >> (BOARD_SQUARES - board_size))
}

fn check_square(number: u32, what: &'static str) -> Result<()> {
    if (1..=BOARD_SQUARES).contains(&number) {
        return Ok(());
    }
    Err(ExerciseError::OutOfRange {
        what,
        min: 1,
        max: u64::from(BOARD_SQUARES),
        value: u64::from(number),
    })
}
