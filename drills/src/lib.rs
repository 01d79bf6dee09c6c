//! Solutions to introductory programming exercises.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure exercise functions (Pig Latin, Blackjack scoring,
//!   reactor safety tables, number classification, ...). No I/O.
//! - **[`io`]**: Config file loading and writing.
//!
//! [`cli`] wires both together behind the `drills` binary.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
