//! Builder utilities for configuring forests.
//!
//! Wraps the `configure -> allocate -> initialize` lifecycle of [`Forest`] in
//! a single call.

use crate::{forest::Forest, node::Weight};

/// Configures and constructs [`Forest`] instances.
///
/// # Examples
/// ```
/// use dynforest_core::{ForestBuilder, NodeId};
///
/// let forest = ForestBuilder::new().with_node_count(4).build::<f64>();
/// assert_eq!(forest.len(), 4);
/// assert_eq!(forest.roots().count(), 4);
/// assert!(forest.node(NodeId::new(3)).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    node_count: usize,
}

impl ForestBuilder {
    /// Creates a builder for an empty forest.
    ///
    /// # Examples
    /// ```
    /// use dynforest_core::ForestBuilder;
    ///
    /// assert_eq!(ForestBuilder::new().node_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes to allocate.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Configures, allocates, and initialises a forest.
    #[must_use]
    pub fn build<W: Weight>(&self) -> Forest<W> {
        let mut forest = Forest::new();
        forest.configure(self.node_count);
        forest.allocate();
        forest.initialize();
        forest
    }
}
