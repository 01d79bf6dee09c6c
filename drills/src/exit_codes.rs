//! Stable exit codes for the drills CLI.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, an exercise precondition, or config errors.
pub const INVALID: i32 = 1;
