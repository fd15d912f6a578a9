//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: `remove` only unlinks a node, so a detached
//! subtree keeps its ID and can be appended somewhere else later.

use crate::{
    DOMTokenList, DomError, DomResult, InternedString, Node, NodeData, NodeId, StringInterner,
};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    pub(crate) nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    /// Add an unlinked node to the arena
    pub fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        self.push_node(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push_node(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push_node(Node::comment(content.to_string()))
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// Check whether `ancestor` is a strict ancestor of `node`
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved, so appending a node to
    /// its current parent moves it to the end of the sibling list.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if self.get(child).is_none() {
            return Err(DomError::NotFound(child));
        }
        if !parent_node.can_have_children()
            || parent == child
            || child == NodeId::ROOT
            || self.is_ancestor(child, parent)
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.remove(child);

        let old_last = self.nodes[parent.0 as usize].last_child;
        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = old_last;
            node.next_sibling = NodeId::NONE;
        }
        if old_last.is_valid() {
            self.nodes[old_last.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
        Ok(())
    }

    /// Detach a node from its parent. Returns false if it had none.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return false;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        true
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Iterate over all descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Descendants { tree: self, root: id, next }
    }

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.resolve(elem.name))
    }

    /// Read an attribute of an element
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Write an attribute of an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let name = self.interner.intern(name);
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        let elem = node.as_element_mut().ok_or(DomError::NotAnElement(id))?;
        elem.set_attr(name, value.to_string());
        Ok(())
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        let name = self.interner.lookup(name)?;
        self.get_mut(id)?.as_element_mut()?.remove_attr(name)
    }

    /// Snapshot of an element's class list (empty for non-elements)
    pub fn class_list(&self, id: NodeId) -> DOMTokenList {
        self.get_attribute(id, "class")
            .map(DOMTokenList::from_string)
            .unwrap_or_default()
    }

    /// Replace an element's class attribute with `list`
    pub fn set_class_list(&mut self, id: NodeId, list: &DOMTokenList) -> DomResult<()> {
        self.set_attribute(id, "class", &list.value())
    }

    /// Toggle a class on an element, returning whether it is now present
    pub fn toggle_class(&mut self, id: NodeId, token: &str, force: Option<bool>) -> DomResult<bool> {
        let mut list = self.class_list(id);
        let present = list.toggle(token, force);
        self.set_class_list(id, &list)?;
        Ok(present)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|(_, node)| node.as_text())
            .collect()
    }

    /// Approximate memory footprint in bytes
    pub fn memory_usage(&self) -> usize {
        let payload: usize = self
            .nodes
            .iter()
            .map(|n| match &n.data {
                NodeData::Element(e) => {
                    e.attrs.capacity() * std::mem::size_of::<crate::Attribute>()
                        + e.attrs.iter().map(|a| a.value.capacity()).sum::<usize>()
                }
                NodeData::Text(t) => t.content.capacity(),
                NodeData::Comment(c) => c.capacity(),
                NodeData::Doctype { public_id, system_id, .. } => {
                    public_id.capacity() + system_id.capacity()
                }
                NodeData::Document => 0,
            })
            .sum();
        self.nodes.capacity() * std::mem::size_of::<Node>() + payload + self.interner.memory_usage()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a next sibling exists, stopping at the subtree root
            let mut current = id;
            loop {
                if current == self.root {
                    break NodeId::NONE;
                }
                let Some(n) = self.tree.get(current) else {
                    break NodeId::NONE;
                };
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                current = n.parent;
                if !current.is_valid() {
                    break NodeId::NONE;
                }
            }
        };

        Some((id, node))
    }
}
