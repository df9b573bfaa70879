//! Benchmark support crate for dynforest.
//!
//! Provides seeded synthetic edge streams and a sweep driver used by the
//! Criterion benchmarks that measure insert-and-count workloads on the forest.

pub mod error;
pub mod params;
pub mod stream;
