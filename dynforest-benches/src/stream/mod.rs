//! Seeded synthetic edge streams and the sweep driver.
//!
//! A stream is a fixed list of weighted edges over `0..node_count`. Replaying
//! it against a fresh forest, with periodic component counts, is the workload
//! the sweep benchmarks measure.

use std::fmt;

use dynforest_core::{Forest, ForestBuilder, InsertOutcome, NodeId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Upper bound (exclusive) of generated edge weights.
pub const MAX_WEIGHT: u32 = 1_000;

/// Topology of a generated edge stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamShape {
    /// Edges `(i, i + 1)`: every insert merges and trees grow deep.
    Path,
    /// Edges `(0, i)`: every insert merges and the hub collects children.
    Star,
    /// Uniform random pairs: later inserts mostly close cycles.
    Random,
}

impl fmt::Display for StreamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::Star => "star",
            Self::Random => "random",
        })
    }
}

/// Configuration for [`EdgeStream::generate`].
#[derive(Clone, Copy, Debug)]
pub struct EdgeStreamConfig {
    /// Edge topology.
    pub shape: StreamShape,
    /// Number of nodes.
    pub node_count: usize,
    /// Edge count for [`StreamShape::Random`]; path and star streams always
    /// have `node_count - 1` edges.
    pub random_edges: usize,
    /// Seed for weights and random endpoints.
    pub seed: u64,
}

/// A generated edge stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeStream {
    node_count: usize,
    edges: Vec<(NodeId, NodeId, u32)>,
}

/// Tally of a replayed sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Inserts that joined two trees.
    pub merged: usize,
    /// Inserts that evicted a lighter cycle edge.
    pub replaced: usize,
    /// Inserts that left the forest unchanged.
    pub unchanged: usize,
    /// Component count after the last insert.
    pub components: usize,
}

impl EdgeStream {
    /// Generates a stream with deterministic weights and endpoints.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::TooFewNodes`] when fewer than two nodes are
    /// requested, or [`BenchSetupError::ZeroValue`] for a random stream with
    /// no edges.
    ///
    /// # Examples
    /// ```
    /// use dynforest_benches::stream::{EdgeStream, EdgeStreamConfig, StreamShape};
    ///
    /// let stream = EdgeStream::generate(&EdgeStreamConfig {
    ///     shape: StreamShape::Star,
    ///     node_count: 5,
    ///     random_edges: 0,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(stream.edges().len(), 4);
    /// # Ok::<(), dynforest_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &EdgeStreamConfig) -> Result<Self, BenchSetupError> {
        let node_count = config.node_count;
        if node_count < 2 {
            return Err(BenchSetupError::TooFewNodes {
                shape: config.shape,
                node_count,
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let edges: Vec<_> = match config.shape {
            StreamShape::Path => (1..node_count)
                .map(|index| {
                    let weight = rng.gen_range(0..MAX_WEIGHT);
                    (NodeId::new(index - 1), NodeId::new(index), weight)
                })
                .collect(),
            StreamShape::Star => (1..node_count)
                .map(|index| (NodeId::new(0), NodeId::new(index), rng.gen_range(0..MAX_WEIGHT)))
                .collect(),
            StreamShape::Random => {
                if config.random_edges == 0 {
                    return Err(BenchSetupError::ZeroValue {
                        context: "random_edges",
                    });
                }
                (0..config.random_edges)
                    .map(|_| random_edge(&mut rng, node_count))
                    .collect()
            }
        };
        Ok(Self { node_count, edges })
    }

    /// Number of nodes the stream addresses.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId, u32)] {
        &self.edges
    }

    /// Replays the stream against a fresh forest, counting components over
    /// every node after each `count_every` inserts and once at the end.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `count_every` is zero, or
    /// [`BenchSetupError::Forest`] if the forest rejects an edge.
    pub fn sweep(&self, count_every: usize) -> Result<SweepReport, BenchSetupError> {
        if count_every == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "count_every",
            });
        }
        let mut forest: Forest<u32> = ForestBuilder::new()
            .with_node_count(self.node_count)
            .build();
        let mut report = SweepReport::default();
        for (position, &(a, b, weight)) in self.edges.iter().enumerate() {
            match forest.insert_edge(a, b, weight)? {
                InsertOutcome::Merged => report.merged += 1,
                InsertOutcome::Replaced { .. } => report.replaced += 1,
                InsertOutcome::Unchanged => report.unchanged += 1,
            }
            if (position + 1).is_multiple_of(count_every) {
                report.components = self.count(&forest)?;
            }
        }
        report.components = self.count(&forest)?;
        Ok(report)
    }

    fn count(&self, forest: &Forest<u32>) -> Result<usize, BenchSetupError> {
        Ok(forest.component_count((0..self.node_count).map(NodeId::new))?)
    }
}

fn random_edge(rng: &mut SmallRng, node_count: usize) -> (NodeId, NodeId, u32) {
    let a = rng.gen_range(0..node_count);
    // Draw from the other `node_count - 1` nodes so self-loops never occur.
    let drawn = rng.gen_range(0..node_count - 1);
    let b = if drawn >= a { drawn + 1 } else { drawn };
    (NodeId::new(a), NodeId::new(b), rng.gen_range(0..MAX_WEIGHT))
}
