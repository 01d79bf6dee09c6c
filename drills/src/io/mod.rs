//! I/O helpers for drills commands.

pub mod config;
