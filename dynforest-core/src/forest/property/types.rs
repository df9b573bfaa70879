//! Fixture types for forest property tests.

use test_strategy::Arbitrary;

/// Upper bound (exclusive) on raw node indices drawn by proptest. Indices are
/// reduced modulo the fixture's node count before use.
pub(super) const RAW_INDEX_BOUND: usize = 64;

/// A single driver step applied to both the forest and the model.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Operation {
    /// Insert a weighted edge. A narrow weight range keeps ties common.
    #[weight(5)]
    Insert {
        #[strategy(0..RAW_INDEX_BOUND)]
        a: usize,
        #[strategy(0..RAW_INDEX_BOUND)]
        b: usize,
        #[strategy(-4_i32..8)]
        weight: i32,
    },
    /// Remove the edge between two nodes, if any.
    #[weight(2)]
    Remove {
        #[strategy(0..RAW_INDEX_BOUND)]
        a: usize,
        #[strategy(0..RAW_INDEX_BOUND)]
        b: usize,
    },
    /// Re-root a tree.
    #[weight(1)]
    Evert {
        #[strategy(0..RAW_INDEX_BOUND)]
        node: usize,
    },
    /// Remove a node's parent edge directly.
    #[weight(1)]
    Detach {
        #[strategy(0..RAW_INDEX_BOUND)]
        node: usize,
    },
}

/// How weights are assigned in insert-only streams.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightProfile {
    /// Every edge has a distinct weight, so the maximum spanning forest is
    /// unique.
    Distinct,
    /// Weights come from a handful of levels, producing many ties.
    FewLevels,
}

/// A node count with a sequence of operations over it.
#[derive(Clone, Debug)]
pub(super) struct OperationFixture {
    pub node_count: usize,
    pub operations: Vec<Operation>,
}

/// A node count with an insert-only edge stream `(a, b, weight)`.
#[derive(Clone, Debug)]
pub(super) struct InsertStreamFixture {
    pub node_count: usize,
    pub profile: WeightProfile,
    pub edges: Vec<(usize, usize, i32)>,
}
