//! Error types for tree operations and consistency checks

/// Contract violations reported by the mutating operations.
///
/// Routine outcomes (duplicate key, key not found, rejected replace) are not
/// errors; they come back as `Ok` values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError<H> {
    #[error("node {0:?} is already linked into a tree")]
    AlreadyLinked(H),

    #[error("node {0:?} is not linked into any tree")]
    NotLinked(H),

    #[error("node {0:?} is linked into a different tree")]
    NotMember(H),
}

/// Result type for tree operations.
pub type Result<T, H> = core::result::Result<T, TreeError<H>>;

/// Broken red-black or search-tree invariant found by `RbTree::check`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation<H> {
    #[error("root {0:?} is red")]
    RedRoot(H),

    #[error("root {0:?} has a parent")]
    RootHasParent(H),

    #[error("node {0:?} is reachable from the root but marked unlinked")]
    Unlinked(H),

    #[error("node {node:?} records parent {recorded:?} but hangs below {actual:?}")]
    ParentMismatch {
        node: H,
        recorded: Option<H>,
        actual: Option<H>,
    },

    #[error("red node {node:?} has red child {child:?}")]
    RedRed { node: H, child: H },

    #[error("node {node:?} is out of order relative to ancestor {ancestor:?}")]
    Order { node: H, ancestor: H },

    #[error("path below {parent:?} has {found} black nodes, expected {expected}")]
    BlackHeight {
        parent: Option<H>,
        expected: usize,
        found: usize,
    },

    #[error("tree records {recorded} nodes but {found} are reachable")]
    Length { recorded: usize, found: usize },
}
