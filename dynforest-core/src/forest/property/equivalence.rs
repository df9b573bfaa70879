//! Model-equivalence property: the forest and the naive model agree after
//! every operation.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{EdgeRemoval, Forest, ForestBuilder, ForestError, InsertOutcome, NodeId};

use super::model::{ModelEdge, ModelForest, ModelInsert, canonical};
use super::types::{Operation, OperationFixture};

pub(super) fn forest_edges(forest: &Forest<i32>) -> Vec<ModelEdge> {
    let mut edges: Vec<ModelEdge> = forest
        .edges()
        .map(|edge| canonical(edge.child().index(), edge.parent().index(), edge.weight()))
        .collect();
    edges.sort_unstable();
    edges
}

pub(super) fn run_model_equivalence_property(fixture: &OperationFixture) -> TestCaseResult {
    let node_count = fixture.node_count;
    let mut forest: Forest<i32> = ForestBuilder::new().with_node_count(node_count).build();
    let mut model = ModelForest::new(node_count);
    let everyone: Vec<usize> = (0..node_count).collect();

    for (step, operation) in fixture.operations.iter().enumerate() {
        apply(&mut forest, &mut model, *operation, node_count)?;

        let check = forest.validate();
        prop_assert!(check.is_ok(), "step {step} ({operation:?}): {check:?}");
        prop_assert_eq!(forest_edges(&forest), model.sorted_edges(), "step {}", step);
        prop_assert_eq!(
            forest.component_count(everyone.iter().copied().map(NodeId::new)),
            Ok(model.component_count(&everyone)),
            "step {}",
            step
        );
        for root in forest.roots() {
            prop_assert_eq!(forest.find_root(root), Ok(root));
        }
    }
    Ok(())
}

fn apply(
    forest: &mut Forest<i32>,
    model: &mut ModelForest,
    operation: Operation,
    node_count: usize,
) -> TestCaseResult {
    match operation {
        Operation::Insert { a, b, weight } => {
            let (a, b) = (a % node_count, b % node_count);
            let subset = [a, b];
            let before = forest.component_count(subset.map(NodeId::new));
            let outcome = forest.insert_edge(NodeId::new(a), NodeId::new(b), weight);
            let expected = model.insert(a, b, weight);
            match (outcome, expected) {
                (Ok(InsertOutcome::Merged), ModelInsert::Merged) => {
                    prop_assert_eq!(before, Ok(2));
                }
                (Ok(InsertOutcome::Replaced { evicted }), ModelInsert::Replaced(edge)) => {
                    let (low, high) = evicted.endpoints();
                    prop_assert_eq!((low.index(), high.index(), evicted.weight()), edge);
                }
                (Ok(InsertOutcome::Unchanged), ModelInsert::Unchanged) => {}
                (actual, expected) => {
                    prop_assert!(false, "insert {a}-{b} ({weight}): {actual:?} vs {expected:?}");
                }
            }
            prop_assert_eq!(forest.component_count(subset.map(NodeId::new)), Ok(1));
            prop_assert!(model.connected(a, b));
        }
        Operation::Remove { a, b } => {
            let (a, b) = (a % node_count, b % node_count);
            let first_parent = forest.node(NodeId::new(a)).map(|node| node.parent());
            let removal = forest.remove_edge(NodeId::new(a), NodeId::new(b));
            let existed = a != b && model.remove(a, b);
            let expected = if !existed {
                EdgeRemoval::NoEdge
            } else if first_parent == Ok(Some(NodeId::new(b))) {
                EdgeRemoval::DetachedFirst
            } else {
                EdgeRemoval::DetachedSecond
            };
            prop_assert_eq!(removal, Ok(expected));
        }
        Operation::Evert { node } => {
            let node = NodeId::new(node % node_count);
            prop_assert_eq!(forest.evert(node), Ok(()));
            prop_assert_eq!(forest.find_root(node), Ok(node));
        }
        Operation::Detach { node } => {
            let id = NodeId::new(node % node_count);
            let parent = forest.node(id).map(|view| view.parent());
            match (forest.remove_parent_edge(id), parent) {
                (Ok(edge), Ok(Some(parent))) => {
                    prop_assert_eq!(edge.parent(), parent);
                    prop_assert!(model.remove(id.index(), parent.index()));
                }
                (Err(ForestError::NotAttached { node }), Ok(None)) => {
                    prop_assert_eq!(node, id);
                }
                (actual, parent) => {
                    prop_assert!(false, "detach {id}: {actual:?} with parent {parent:?}");
                }
            }
        }
    }
    Ok(())
}
