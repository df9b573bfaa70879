//! Human-readable listing of the forest for debugging.
//!
//! The dump is a side channel: drivers must rely on the typed results of the
//! forest operations, never on parsing this text.

use std::fmt::{self, Write as _};

use crate::node::{NodeId, Weight};

use super::Forest;

impl<W: Weight> Forest<W> {
    /// Lists every non-root node using raw indices as labels.
    ///
    /// # Examples
    /// ```
    /// use dynforest_core::{ForestBuilder, NodeId};
    ///
    /// let mut forest = ForestBuilder::new().with_node_count(2).build::<i32>();
    /// forest.insert_edge(NodeId::new(0), NodeId::new(1), 4)?;
    /// assert_eq!(forest.debug_dump(), "id: 0 weight: 4, parent: 1 root: 1\n");
    /// # Ok::<(), dynforest_core::ForestError>(())
    /// ```
    #[must_use]
    pub fn debug_dump(&self) -> String {
        self.debug_dump_with(NodeId::index)
    }

    /// Lists every non-root node with its weight, parent, and root, labelling
    /// nodes through `label`.
    ///
    /// Roots are omitted; an edgeless forest dumps as an empty string.
    #[must_use]
    pub fn debug_dump_with<F, L>(&self, label: F) -> String
    where
        F: Fn(NodeId) -> L,
        L: fmt::Display,
    {
        let mut out = String::new();
        for edge in self.arena.edges() {
            let root = self.arena.find_root(edge.child());
            // Writing into a `String` cannot fail.
            let _ = writeln!(
                out,
                "id: {} weight: {:?}, parent: {} root: {}",
                label(edge.child()),
                edge.weight(),
                label(edge.parent()),
                label(root),
            );
        }
        out
    }
}
