//! Benchmark parameter types.
//!
//! Formats benchmark ids so Criterion reports group runs by shape and size.

use std::fmt;

use crate::stream::StreamShape;

/// Parameters for a sweep benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SweepBenchParams {
    /// Shape of the generated edge stream.
    pub shape: StreamShape,
    /// Number of nodes in the forest.
    pub node_count: usize,
    /// Number of inserts between component counts.
    pub count_every: usize,
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},every={}",
            self.shape, self.node_count, self.count_every
        )
    }
}
