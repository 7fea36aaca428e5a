//! Core utilities shared by every system (logging macros, RNG).

#[macro_use]
pub mod utils;
