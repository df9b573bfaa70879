//! Strategy builders for forest property tests.
//!
//! Operation sequences are drawn by proptest directly. Insert-only streams are
//! generated from a seeded [`SmallRng`] so the same generator also backs the
//! rstest cases with fixed seeds.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{InsertStreamFixture, Operation, OperationFixture, WeightProfile};

/// Largest node count used by generated fixtures.
const MAX_NODES: usize = 24;
/// Longest operation sequence drawn by proptest.
const MAX_OPERATIONS: usize = 96;
/// Number of distinct weights used by [`WeightProfile::FewLevels`].
const WEIGHT_LEVELS: i32 = 3;

pub(super) fn operation_fixture_strategy() -> impl Strategy<Value = OperationFixture> {
    (1..=MAX_NODES, vec(any::<Operation>(), 0..MAX_OPERATIONS)).prop_map(
        |(node_count, operations)| OperationFixture {
            node_count,
            operations,
        },
    )
}

pub(super) fn insert_stream_strategy() -> impl Strategy<Value = InsertStreamFixture> {
    (any::<WeightProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_insert_stream(profile, &mut rng)
    })
}

/// Generates a random insert-only stream over up to [`MAX_NODES`] nodes.
///
/// Endpoints are drawn uniformly, so streams include self-loops and repeated
/// pairs. [`WeightProfile::Distinct`] assigns a shuffled permutation of
/// `0..len` as weights.
pub(super) fn generate_insert_stream(
    profile: WeightProfile,
    rng: &mut SmallRng,
) -> InsertStreamFixture {
    let node_count = rng.gen_range(2..=MAX_NODES);
    let edge_count = rng.gen_range(0..=node_count.saturating_mul(3));

    let mut weights: Vec<i32> = match profile {
        WeightProfile::Distinct => (0..).take(edge_count).collect(),
        WeightProfile::FewLevels => (0..edge_count)
            .map(|_| rng.gen_range(0..WEIGHT_LEVELS))
            .collect(),
    };
    weights.shuffle(rng);

    let edges = weights
        .into_iter()
        .map(|weight| {
            let a = rng.gen_range(0..node_count);
            let b = rng.gen_range(0..node_count);
            (a, b, weight)
        })
        .collect();

    InsertStreamFixture {
        node_count,
        profile,
        edges,
    }
}

/// Generates a random operation sequence, used by the seeded rstest cases.
pub(super) fn generate_operations(rng: &mut SmallRng) -> OperationFixture {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let length = rng.gen_range(0..MAX_OPERATIONS);
    let operations = (0..length)
        .map(|_| {
            let a = rng.gen_range(0..node_count);
            let b = rng.gen_range(0..node_count);
            match rng.gen_range(0..9) {
                0..=4 => Operation::Insert {
                    a,
                    b,
                    weight: rng.gen_range(-4..8),
                },
                5 | 6 => Operation::Remove { a, b },
                7 => Operation::Evert { node: a },
                _ => Operation::Detach { node: a },
            }
        })
        .collect();
    OperationFixture {
        node_count,
        operations,
    }
}
