//! DOM Node Operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found in the arena
    #[error("Node {0:?} not found")]
    NotFound(NodeId),

    /// Inserting a node into itself, one of its descendants, or a leaf node
    #[error("Cannot insert {child:?} into {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Attribute access on a non-element node
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),
}
