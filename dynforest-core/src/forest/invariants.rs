//! Structural invariant checks for the forest.
//!
//! Surfaced through [`Forest::validate`] so property tests and drivers can
//! assert forest health after each operation without reimplementing the
//! traversal.

use tracing::{debug, trace};

use crate::{
    error::{ForestError, InvariantKind, Result},
    node::{NodeId, Weight},
};

use super::Forest;

impl<W: Weight> Forest<W> {
    /// Checks that every parent reference is in range, that stored child
    /// counts equal the live number of children, and that every parent chain
    /// reaches a root.
    ///
    /// Cost is quadratic in the worst case; intended for tests and debugging.
    ///
    /// # Errors
    /// Returns the first [`ForestError::InvariantViolation`] found.
    pub fn validate(&self) -> Result<()> {
        let node_count = self.arena.len();
        trace!(node_count, "validating forest");

        let mut live_children = vec![0_usize; node_count];
        for edge in self.arena.edges() {
            let parent = edge.parent();
            let Some(count) = live_children.get_mut(parent.index()) else {
                return Err(violation(edge.child(), InvariantKind::DanglingParent));
            };
            *count += 1;
        }

        for (index, live) in live_children.iter().enumerate() {
            let node = NodeId::new(index);
            if self.arena.child_count(node) != *live {
                return Err(violation(node, InvariantKind::ChildCount));
            }
        }

        for index in 0..node_count {
            let start = NodeId::new(index);
            let mut current = start;
            let mut steps = 0_usize;
            while let Some(parent) = self.arena.parent(current) {
                if steps >= node_count {
                    return Err(violation(start, InvariantKind::Cycle));
                }
                current = parent;
                steps += 1;
            }
        }

        Ok(())
    }
}

fn violation(node: NodeId, invariant: InvariantKind) -> ForestError {
    debug!(%node, %invariant, "forest invariant violated");
    ForestError::InvariantViolation { node, invariant }
}
