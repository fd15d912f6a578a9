//! Ancillary DOM - Document Object Model
//!
//! Arena-backed DOM tree. Nodes are addressed by [`NodeId`] handles and
//! can be moved between parents or detached without being freed, which is
//! what the relocation core relies on.

mod classlist;
mod document;
mod interner;
mod node;
mod operations;
mod tree;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use operations::{DomError, DomResult};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert to `Option`, mapping [`NodeId::NONE`] to `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NONE
    }
}
