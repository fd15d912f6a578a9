//! Error types

use ancillary_dom::NodeId;

/// Result type for controller construction
pub type Result<T> = std::result::Result<T, AncillaryError>;

/// Controller errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AncillaryError {
    /// The base node is missing, not an element, or lacks the base attribute
    #[error("Node {node:?} is not an ancillary base: no `{attribute}` attribute")]
    InvalidBase { node: NodeId, attribute: String },

    /// The base attribute is present but empty
    #[error("Ancillary base {node:?} has an empty `{attribute}` attribute")]
    EmptyBaseName { node: NodeId, attribute: String },
}
