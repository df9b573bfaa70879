//! Support library for the `dynforest` binary.
//!
//! Exposes the script runner and logging setup so doctests and integration
//! tests can drive a forest without spawning a subprocess.

pub mod cli;
pub mod logging;
