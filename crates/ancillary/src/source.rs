//! Directive sources
//!
//! Where the controller reads position directives from on every sync. The
//! default is the class attribute of the document body, but any node, a
//! fixed string or a closure can stand in.

use std::borrow::Cow;

use ancillary_dom::{DomTree, NodeId};

/// Supplies the class-name string that directives are scanned from
pub trait DirectiveSource {
    /// Current class names, or `None` when the host has none
    fn class_names<'a>(&'a self, tree: &'a DomTree) -> Option<Cow<'a, str>>;
}

/// The class attribute of a node in the tree (normally `<body>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostClass(pub NodeId);

impl DirectiveSource for HostClass {
    fn class_names<'a>(&'a self, tree: &'a DomTree) -> Option<Cow<'a, str>> {
        tree.get_attribute(self.0, "class").map(Cow::Borrowed)
    }
}

impl DirectiveSource for String {
    fn class_names<'a>(&'a self, _tree: &'a DomTree) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<F> DirectiveSource for F
where
    F: Fn(&DomTree) -> Option<String>,
{
    fn class_names<'a>(&'a self, tree: &'a DomTree) -> Option<Cow<'a, str>> {
        self(tree).map(Cow::Owned)
    }
}
