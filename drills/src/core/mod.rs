//! Pure exercise logic.
//!
//! Core modules must be free of I/O side effects. Each module is a leaf: no
//! exercise calls into another, and none keeps state between calls.

pub mod armstrong;
pub mod black_jack;
pub mod bob;
pub mod collatz;
pub mod currency;
pub mod darts;
pub mod error;
pub mod grains;
pub mod isogram;
pub mod lasagna;
pub mod meltdown;
pub mod perfect_numbers;
pub mod pig_latin;
pub mod raindrops;
pub mod triangle;
pub mod vocab;
