//! Dynforest core library.
//!
//! A dynamic connectivity forest over a fixed set of nodes. A sweep driver
//! feeds weighted edges one at a time; whenever an edge would close a cycle,
//! the heavier of the new edge and the lightest edge on the cycle survives.
//! At any step the driver can ask whether two nodes are connected or how many
//! components a subset of nodes spans.
//!
//! Nodes are addressed by [`NodeId`] into an arena owned by the [`Forest`];
//! no node holds a pointer to another. The forest is single-threaded: share
//! it behind one exclusive lock per logical operation if needed.

mod builder;
mod error;
mod forest;
mod node;

pub use crate::{
    builder::ForestBuilder,
    error::{ForestError, ForestErrorCode, InvariantKind, Result},
    forest::{EdgeRemoval, Forest},
    node::{Edge, InsertOutcome, MinWeightRoot, NodeId, NodeRef, NodeState, Weight},
};

#[cfg(test)]
mod test_utils;
