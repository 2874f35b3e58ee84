//! Error types for tree construction.
//!
//! Navigation never fails: a missing parent, sibling, or attribute is an
//! ordinary `None`. Errors only arise while wiring nodes together, when a
//! requested link would break the tree's structural invariants.

use crate::tree::NodeId;

/// The error type returned when a tree-building operation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The target node's kind cannot own children (text, comment, etc.).
    #[error("node {0} cannot have children")]
    NotAContainer(NodeId),

    /// The node already has a parent or sibling links.
    #[error("node {0} is already attached; build links from fresh nodes")]
    AlreadyAttached(NodeId),

    /// The document root cannot be placed under a parent or in a chain.
    #[error("node {0} is the document root")]
    RootNode(NodeId),

    /// Appending the node would make it its own ancestor.
    #[error("appending node {0} would create a cycle")]
    WouldCycle(NodeId),

    /// The same node appears twice in a sibling chain.
    #[error("node {0} appears more than once in the chain")]
    DuplicateNode(NodeId),
}
