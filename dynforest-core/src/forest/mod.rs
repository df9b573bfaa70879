//! The forest: a fixed-size node arena plus the batch operations a sweep
//! driver needs at each step.
//!
//! A forest is set up once through `configure -> allocate -> initialize` (or
//! [`crate::ForestBuilder::build`]) and then mutated by edge insertions and
//! removals. Every node index is range-checked before anything is written, so
//! a returned error always means the forest is unchanged. Usage errors are
//! also logged at `warn` level so drivers that discard the result still leave
//! a trace.

mod dump;
mod invariants;

use tracing::{debug, instrument, trace, warn};

use crate::{
    error::{ForestError, Result},
    node::{Edge, InsertOutcome, MinWeightRoot, NodeArena, NodeId, NodeRef, Weight},
};

/// Which endpoint lost its parent edge in [`Forest::remove_edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeRemoval {
    /// The first endpoint was the child and is now the root of its subtree.
    DetachedFirst,
    /// The second endpoint was the child and is now the root of its subtree.
    DetachedSecond,
    /// Neither endpoint is the other's parent; nothing changed.
    NoEdge,
}

/// A dynamic forest over a fixed set of nodes with weighted edges.
///
/// Edge insertion follows a maximum spanning forest policy: an edge that
/// would close a cycle either displaces the lightest edge on that cycle or is
/// dropped, whichever keeps the heavier edge. Trees are never rebalanced, so
/// operation cost grows with tree depth.
///
/// # Examples
/// ```
/// use dynforest_core::{Forest, InsertOutcome, NodeId};
///
/// let mut forest = Forest::<u32>::new();
/// forest.configure(3);
/// forest.allocate();
/// forest.initialize();
///
/// let [a, b, c] = [0, 1, 2].map(NodeId::new);
/// assert_eq!(forest.insert_edge(a, b, 1)?, InsertOutcome::Merged);
/// assert_eq!(forest.insert_edge(b, c, 1)?, InsertOutcome::Merged);
/// assert!(matches!(forest.insert_edge(a, c, 5)?, InsertOutcome::Replaced { .. }));
/// assert_eq!(forest.component_count([a, b, c])?, 1);
/// # Ok::<(), dynforest_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Forest<W> {
    node_count: usize,
    arena: NodeArena<W>,
}

impl<W> Default for Forest<W> {
    fn default() -> Self {
        Self {
            node_count: 0,
            arena: NodeArena::default(),
        }
    }
}

impl<W: Weight> Forest<W> {
    /// Creates an unconfigured forest with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the number of nodes that [`Forest::allocate`] will create.
    ///
    /// Has no effect on existing storage until the next allocation.
    pub fn configure(&mut self, node_count: usize) {
        self.node_count = node_count;
    }

    /// Returns the configured node count.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Sizes node storage to the configured count with every node a root.
    ///
    /// Calling this again discards all edges. Because [`NodeRef`] views borrow
    /// the forest, none can survive a reallocation.
    #[instrument(
        name = "forest.allocate",
        level = "trace",
        skip_all,
        fields(node_count = self.node_count),
    )]
    pub fn allocate(&mut self) {
        if self.arena.len() > 0 {
            debug!(
                previous = self.arena.len(),
                node_count = self.node_count,
                "reallocating forest; all edges are discarded"
            );
        }
        self.arena.reset(self.node_count);
    }

    /// Lifecycle hook run after allocation. Currently does nothing.
    pub fn initialize(&mut self) {
        trace!(nodes = self.arena.len(), "forest initialised");
    }

    /// Returns the number of allocated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` when no nodes are allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Returns a read-only view of the node at `id`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is not allocated.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, W>> {
        self.check(id)?;
        Ok(NodeRef::new(&self.arena, id))
    }

    /// Returns the root of the tree containing `id`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is not allocated.
    pub fn find_root(&self, id: NodeId) -> Result<NodeId> {
        self.check(id)?;
        Ok(self.arena.find_root(id))
    }

    /// Returns the root of `id`'s tree and the owner of the lightest edge on
    /// the path to it.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is not allocated.
    pub fn find_min_weight_root(&self, id: NodeId) -> Result<MinWeightRoot<W>> {
        self.check(id)?;
        Ok(self.arena.find_min_weight_root(id))
    }

    /// Returns `true` when `a` and `b` belong to the same tree.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either node is not allocated.
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.find_root(a)? == self.find_root(b)?)
    }

    /// Re-roots the tree containing `id` so that `id` becomes its root.
    ///
    /// The undirected edge set and all weights are unchanged.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is not allocated.
    pub fn evert(&mut self, id: NodeId) -> Result<()> {
        self.check(id)?;
        self.arena.evert(id);
        Ok(())
    }

    /// Inserts a weighted edge between `a` and `b`.
    ///
    /// Nodes in different trees are merged. When they already share a tree
    /// the edge replaces the lightest edge on the path between them if it is
    /// strictly heavier, and is dropped otherwise. Self-loops are dropped.
    /// `a` ends up as the child of `b` whenever the edge is kept.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either node is not allocated.
    #[instrument(
        name = "forest.insert_edge",
        level = "trace",
        skip_all,
        fields(a = %a, b = %b, weight = ?weight),
    )]
    pub fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<InsertOutcome<W>> {
        self.check(a)?;
        self.check(b)?;
        let outcome = self.arena.insert_edge(a, b, weight);
        match &outcome {
            InsertOutcome::Merged => debug!(%a, %b, "merged trees"),
            InsertOutcome::Replaced { evicted } => debug!(
                %a,
                %b,
                evicted_child = %evicted.child(),
                evicted_parent = %evicted.parent(),
                evicted_weight = ?evicted.weight(),
                "replaced lighter cycle edge"
            ),
            InsertOutcome::Unchanged => debug!(%a, %b, "edge dropped"),
        }
        Ok(outcome)
    }

    /// Removes the edge from `id` to its parent, returning it.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `id` is not allocated and
    /// [`ForestError::NotAttached`] when `id` is a root. The forest is left
    /// unchanged in both cases.
    pub fn remove_parent_edge(&mut self, id: NodeId) -> Result<Edge<W>> {
        self.check(id)?;
        self.arena.detach(id).ok_or_else(|| {
            warn!(node = %id, "cannot remove the parent edge of a root node");
            ForestError::NotAttached { node: id }
        })
    }

    /// Removes the edge between `a` and `b`, whichever way it is oriented.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either node is not allocated.
    #[instrument(name = "forest.remove_edge", level = "trace", skip_all, fields(a = %a, b = %b))]
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeRemoval> {
        self.check(a)?;
        self.check(b)?;
        let removal = if self.arena.parent(a) == Some(b) {
            self.arena.detach(a);
            EdgeRemoval::DetachedFirst
        } else if self.arena.parent(b) == Some(a) {
            self.arena.detach(b);
            EdgeRemoval::DetachedSecond
        } else {
            debug!(%a, %b, "no edge between nodes");
            EdgeRemoval::NoEdge
        };
        Ok(removal)
    }

    /// Counts the distinct trees touched by `ids`.
    ///
    /// Each id is resolved to its root and the distinct roots are counted;
    /// duplicate ids are allowed and an empty input yields `0`. Nothing is
    /// cached between calls.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when any id is not allocated.
    pub fn component_count<I>(&self, ids: I) -> Result<usize>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut roots = ids
            .into_iter()
            .map(|id| self.find_root(id))
            .collect::<Result<Vec<_>>>()?;
        roots.sort_unstable();
        roots.dedup();
        Ok(roots.len())
    }

    /// Iterates over the current roots in index order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.arena.roots()
    }

    /// Iterates over every live edge in child-index order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.arena.edges()
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if self.arena.contains(id) {
            return Ok(());
        }
        let node_count = self.arena.len();
        warn!(node = %id, node_count, "node index out of range");
        Err(ForestError::OutOfRange { node: id, node_count })
    }
}
