//! Maximum spanning forest property: after an insert-only stream the forest
//! holds a maximum-weight spanning forest of every edge it was offered.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{Forest, ForestBuilder, NodeId};

use super::equivalence::forest_edges;
use super::oracle::maximum_spanning_forest;
use super::types::{InsertStreamFixture, WeightProfile};

pub(super) fn run_maximum_spanning_property(fixture: &InsertStreamFixture) -> TestCaseResult {
    let node_count = fixture.node_count;
    let mut forest: Forest<i32> = ForestBuilder::new().with_node_count(node_count).build();

    for &(a, b, weight) in &fixture.edges {
        let before = forest.component_count((0..node_count).map(NodeId::new));
        let outcome = forest.insert_edge(NodeId::new(a), NodeId::new(b), weight);
        let after = forest.component_count((0..node_count).map(NodeId::new));
        match outcome {
            Ok(outcome) if outcome.is_merged() => {
                prop_assert_eq!(after.clone().map(|count| count + 1), before);
            }
            Ok(_) => prop_assert_eq!(&after, &before),
            Err(err) => prop_assert!(false, "insert {a}-{b} failed: {err}"),
        }
    }

    let check = forest.validate();
    prop_assert!(check.is_ok(), "{check:?}");

    let oracle = maximum_spanning_forest(node_count, &fixture.edges);
    let edges = forest_edges(&forest);
    let total: i64 = edges.iter().map(|&(_, _, weight)| i64::from(weight)).sum();
    prop_assert_eq!(total, oracle.total_weight);
    prop_assert_eq!(forest.roots().count(), oracle.component_count);
    if fixture.profile == WeightProfile::Distinct {
        prop_assert_eq!(edges, oracle.edges);
    }
    Ok(())
}
