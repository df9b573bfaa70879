//! Forest nodes and the primitive tree operations.
//!
//! Nodes live in a [`NodeArena`] and refer to their parent by [`NodeId`], so
//! the arena is the only owner of node storage. Each non-root node stores the
//! weight of the edge to its parent alongside the parent reference; a root has
//! neither. The primitives here (root search, eversion, attach, detach and the
//! weighted insertion policy) assume the ids they receive are in range.
//! Range checks, diagnostics, and batch operations belong to
//! [`crate::Forest`].

use std::fmt;

/// Stable index of a node within its forest.
///
/// # Examples
/// ```
/// use dynforest_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge weights accepted by the forest.
///
/// The forest only compares weights with `<` and `>`; it never performs
/// arithmetic on them. Any `Copy` type with a partial order qualifies, which
/// includes the integer and floating-point primitives.
pub trait Weight: Copy + PartialOrd + fmt::Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + fmt::Debug {}

/// Whether a node currently has a parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeState {
    /// The node has no parent and heads its component.
    Root,
    /// The node hangs below a parent through a weighted edge.
    Attached,
}

/// A weighted forest edge in its current orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<W> {
    child: NodeId,
    parent: NodeId,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Returns the endpoint that stores the edge as its parent link.
    #[must_use]
    #[rustfmt::skip]
    pub fn child(&self) -> NodeId { self.child }

    /// Returns the endpoint closer to the root.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> NodeId { self.parent }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }

    /// Returns the endpoints as `(min, max)`, ignoring orientation.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        if self.child <= self.parent {
            (self.child, self.parent)
        } else {
            (self.parent, self.child)
        }
    }
}

/// Result of [`crate::Forest::find_min_weight_root`].
///
/// `min` is the node on the path from the start node to `root` (excluding the
/// root) whose edge to its parent is lightest. When the start node is itself a
/// root the path is empty, `min` equals `root`, and `min_weight` is `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinWeightRoot<W> {
    root: NodeId,
    min: NodeId,
    min_weight: Option<W>,
}

impl<W: Weight> MinWeightRoot<W> {
    /// Returns the root of the start node's tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> NodeId { self.root }

    /// Returns the node owning the lightest edge on the path to the root.
    #[must_use]
    #[rustfmt::skip]
    pub fn min(&self) -> NodeId { self.min }

    /// Returns the lightest edge weight on the path, if the path is non-empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_weight(&self) -> Option<W> { self.min_weight }
}

/// Structural effect of inserting a weighted edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsertOutcome<W> {
    /// The endpoints were in different trees, which are now one.
    Merged,
    /// The endpoints were already connected and the new edge outweighed the
    /// lightest edge on the connecting path, which was removed.
    Replaced {
        /// The edge that was dropped to keep the forest acyclic.
        evicted: Edge<W>,
    },
    /// The endpoints were already connected and the new edge was not heavier
    /// than the lightest edge on the connecting path. The edge set is
    /// unchanged.
    Unchanged,
}

impl<W> InsertOutcome<W> {
    /// Returns `true` when the insertion joined two components.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Link<W> {
    parent: NodeId,
    weight: W,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<W> {
    link: Option<Link<W>>,
    child_count: usize,
}

impl<W> Default for Node<W> {
    fn default() -> Self {
        Self {
            link: None,
            child_count: 0,
        }
    }
}

/// Fixed-capacity node storage with the primitive tree operations.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<W> {
    nodes: Vec<Node<W>>,
}

impl<W> Default for NodeArena<W> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<W: Weight> NodeArena<W> {
    /// Replaces the storage with `node_count` parentless nodes.
    pub(crate) fn reset(&mut self, node_count: usize) {
        self.nodes.clear();
        self.nodes.resize_with(node_count, Node::default);
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].link.map(|link| link.parent)
    }

    pub(crate) fn weight(&self, id: NodeId) -> Option<W> {
        self.nodes[id.0].link.map(|link| link.weight)
    }

    pub(crate) fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].child_count
    }

    pub(crate) fn parent_edge(&self, id: NodeId) -> Option<Edge<W>> {
        self.nodes[id.0].link.map(|link| Edge {
            child: id,
            parent: link.parent,
            weight: link.weight,
        })
    }

    /// Iterates over every live edge, keyed by its child endpoint.
    pub(crate) fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.nodes.iter().enumerate().filter_map(|(index, node)| {
            node.link.map(|link| Edge {
                child: NodeId(index),
                parent: link.parent,
                weight: link.weight,
            })
        })
    }

    /// Iterates over every parentless node.
    pub(crate) fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.link.is_none())
            .map(|(index, _)| NodeId(index))
    }

    pub(crate) fn find_root(&self, start: NodeId) -> NodeId {
        let mut current = start;
        while let Some(link) = self.nodes[current.0].link {
            current = link.parent;
        }
        current
    }

    pub(crate) fn find_min_weight_root(&self, start: NodeId) -> MinWeightRoot<W> {
        let mut current = start;
        let mut min = start;
        let mut min_weight = None;
        while let Some(link) = self.nodes[current.0].link {
            if min_weight.is_none_or(|lightest| link.weight < lightest) {
                min = current;
                min_weight = Some(link.weight);
            }
            current = link.parent;
        }
        MinWeightRoot {
            root: current,
            min,
            min_weight,
        }
    }

    /// Re-roots the tree containing `pivot` at `pivot`.
    ///
    /// Every link on the path from `pivot` to the former root is reversed and
    /// each edge keeps its weight, now stored on the endpoint that became the
    /// child. The pivot gains the former parent as a child and the former root
    /// loses its only path child; nodes in between swap one child for another.
    pub(crate) fn evert(&mut self, pivot: NodeId) {
        let Some(mut carried) = self.nodes[pivot.0].link.take() else {
            return;
        };
        self.nodes[pivot.0].child_count += 1;

        let mut child = pivot;
        loop {
            let node = carried.parent;
            let reversed = Link {
                parent: child,
                weight: carried.weight,
            };
            match self.nodes[node.0].link.replace(reversed) {
                Some(next) => {
                    child = node;
                    carried = next;
                }
                None => {
                    self.nodes[node.0].child_count -= 1;
                    break;
                }
            }
        }
    }

    /// Hangs the root `child` below `parent` through an edge of `weight`.
    fn attach(&mut self, child: NodeId, parent: NodeId, weight: W) {
        debug_assert!(self.nodes[child.0].link.is_none(), "only roots attach");
        self.nodes[child.0].link = Some(Link { parent, weight });
        self.nodes[parent.0].child_count += 1;
    }

    /// Removes the edge from `child` to its parent, returning it.
    ///
    /// Returns `None` and leaves the arena untouched when `child` is a root.
    pub(crate) fn detach(&mut self, child: NodeId) -> Option<Edge<W>> {
        let link = self.nodes[child.0].link.take()?;
        self.nodes[link.parent.0].child_count -= 1;
        Some(Edge {
            child,
            parent: link.parent,
            weight: link.weight,
        })
    }

    /// Inserts the edge `(from, to)` under the maximum spanning forest policy.
    ///
    /// `from` is everted first so it can take `to` as its parent. When both
    /// endpoints already share a tree, the new edge only survives if it is
    /// strictly heavier than the lightest edge on the path from `to` to
    /// `from`, in which case that lightest edge is cut before `from` attaches.
    pub(crate) fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> InsertOutcome<W> {
        if from == to {
            return InsertOutcome::Unchanged;
        }

        self.evert(from);
        let path = self.find_min_weight_root(to);
        if path.root != from {
            self.attach(from, to, weight);
            return InsertOutcome::Merged;
        }

        match path.min_weight {
            Some(lightest) if weight > lightest => {
                // `path.min` owns a parent link whenever `min_weight` is set.
                let Some(evicted) = self.detach(path.min) else {
                    return InsertOutcome::Unchanged;
                };
                self.attach(from, to, weight);
                InsertOutcome::Replaced { evicted }
            }
            _ => InsertOutcome::Unchanged,
        }
    }
}

/// Read-only view of a node, borrowed from its forest.
///
/// A view keeps the forest immutably borrowed, so the forest cannot be
/// reallocated or mutated while the view is alive.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'forest, W> {
    arena: &'forest NodeArena<W>,
    id: NodeId,
}

impl<'forest, W: Weight> NodeRef<'forest, W> {
    pub(crate) fn new(arena: &'forest NodeArena<W>, id: NodeId) -> Self {
        Self { arena, id }
    }

    /// Returns the node's stable identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> NodeId { self.id }

    /// Returns whether the node is a root or attached.
    #[must_use]
    pub fn state(&self) -> NodeState {
        if self.arena.parent(self.id).is_some() {
            NodeState::Attached
        } else {
            NodeState::Root
        }
    }

    /// Returns `true` when the node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.state() == NodeState::Root
    }

    /// Returns the node's parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.arena.parent(self.id)
    }

    /// Returns the weight of the edge to the parent, if any.
    #[must_use]
    pub fn weight(&self) -> Option<W> {
        self.arena.weight(self.id)
    }

    /// Returns the edge to the parent, if any.
    #[must_use]
    pub fn parent_edge(&self) -> Option<Edge<W>> {
        self.arena.parent_edge(self.id)
    }

    /// Returns the number of nodes whose parent is this node.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.arena.child_count(self.id)
    }

    /// Returns the root of the node's tree.
    #[must_use]
    pub fn find_root(&self) -> NodeId {
        self.arena.find_root(self.id)
    }

    /// Returns the root together with the lightest edge owner on the path.
    #[must_use]
    pub fn find_min_weight_root(&self) -> MinWeightRoot<W> {
        self.arena.find_min_weight_root(self.id)
    }
}
