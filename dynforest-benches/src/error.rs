//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use dynforest_core::ForestError;

use crate::stream::StreamShape;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The shape needs at least two nodes to produce any edge.
    #[error("a {shape} stream needs at least 2 nodes, got {node_count}")]
    TooFewNodes {
        /// Requested stream shape.
        shape: StreamShape,
        /// Requested node count.
        node_count: usize,
    },
    /// The forest rejected an operation during a sweep.
    #[error("forest operation failed: {0}")]
    Forest(#[from] ForestError),
}
