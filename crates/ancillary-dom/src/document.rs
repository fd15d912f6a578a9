//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        let linked = tree.append_child(tree.root(), html).is_ok()
            && tree.append_child(html, head).is_ok()
            && tree.append_child(html, body).is_ok();
        debug_assert!(linked, "fresh skeleton nodes always link");

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate <html>, <head> and <body> after the tree was built externally
    pub fn finalize(&mut self) {
        self.html_element = self.find_child(self.tree.root(), "html");
        if self.html_element.is_valid() {
            self.head_element = self.find_child(self.html_element, "head");
            self.body_element = self.find_child(self.html_element, "body");
        }
        tracing::debug!(
            "Document finalized: body {}",
            if self.body_element.is_valid() { "found" } else { "missing" }
        );
    }

    fn find_child(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree
            .children(parent)
            .find(|(id, _)| self.tree.tag_name(*id) == Some(tag))
            .map(|(id, _)| id)
            .unwrap_or(NodeId::NONE)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// First element carrying `name="value"`, in document order
    pub fn query_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .map(|(id, _)| id)
            .find(|&id| self.tree.get_attribute(id, name) == Some(value))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.tree.memory_usage() + self.url.capacity()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
