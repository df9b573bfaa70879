//! Error types for the dynforest core library.
//!
//! Defines the error enum exposed by the forest API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::node::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Structural invariants checked by [`crate::Forest::validate`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvariantKind {
    /// A node's stored child count differs from its live number of children.
    ChildCount,
    /// Following parents from a node revisits a node before reaching a root.
    Cycle,
    /// A node's parent reference points outside the allocated arena.
    DanglingParent,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildCount => f.write_str("child count matches live children"),
            Self::Cycle => f.write_str("parent chain is acyclic"),
            Self::DanglingParent => f.write_str("parent reference is in range"),
        }
    }
}

/// Error type produced by [`crate::Forest`] operations.
///
/// Usage errors ([`ForestError::NotAttached`], [`ForestError::OutOfRange`])
/// are reported before any mutation happens, so the forest is unchanged when
/// one is returned.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// An edge removal targeted a node that has no parent.
    #[error("node {node} is a root and has no parent edge to remove")]
    NotAttached {
        /// The parentless node.
        node: NodeId,
    },
    /// A node index fell outside the allocated arena.
    #[error("node {node} is out of range for a forest of {node_count} node(s)")]
    OutOfRange {
        /// The requested node index.
        node: NodeId,
        /// Number of allocated nodes.
        node_count: usize,
    },
    /// A structural invariant does not hold.
    #[error("invariant `{invariant}` violated at node {node}")]
    InvariantViolation {
        /// Node at which the violation was detected.
        node: NodeId,
        /// The violated invariant.
        invariant: InvariantKind,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// An edge removal targeted a node that has no parent.
        NotAttached => NotAttached { .. } => "FOREST_NOT_ATTACHED",
        /// A node index fell outside the allocated arena.
        OutOfRange => OutOfRange { .. } => "FOREST_OUT_OF_RANGE",
        /// A structural invariant does not hold.
        InvariantViolation => InvariantViolation { .. } => "FOREST_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
