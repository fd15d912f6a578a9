//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts the result into the arena tree.

use ancillary_dom::{Document, DomTree, Node, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, HtmlError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node (and its children) into the arena under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let name = tree.interner_mut().intern(&name.to_string());
                let id = tree.push_node(Node::doctype(
                    name,
                    public_id.to_string(),
                    system_id.to_string(),
                ));
                attach(tree, parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                // Whitespace between tags carries no content for relocation
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    attach(tree, parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(&contents.to_string());
                attach(tree, parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let tag = tree.interner_mut().intern(&name.local);
                let mut node = Node::element(tag);
                if let Some(elem) = node.as_element_mut() {
                    for attr in attrs.borrow().iter() {
                        let attr_name = tree.interner_mut().intern(&attr.name.local);
                        elem.set_attr(attr_name, attr.value.to_string());
                    }
                }

                let id = tree.push_node(node);
                attach(tree, parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

fn attach(tree: &mut DomTree, parent: NodeId, child: NodeId) {
    if let Err(err) = tree.append_child(parent, child) {
        tracing::warn!("Dropping node during HTML conversion: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert!(doc.body().is_valid());
    }

    #[test]
    fn test_parse_fragment_gets_body() {
        let html = "<div data-nc-element=\"logo\"><span>Text</span></div>";
        let doc = HtmlParser::new().parse(html).unwrap();

        // Fragments get wrapped in html/head/body by html5ever
        let div = doc.query_attribute("data-nc-element", "logo").unwrap();
        assert_eq!(doc.tree().parent(div), Some(doc.body()));
    }

    #[test]
    fn test_attribute_names_lowercased() {
        let doc = HtmlParser::new()
            .parse("<div DATA-NC-CONTAINER=\"Header\"></div>")
            .unwrap();

        // Names are normalized by the tokenizer, values are not
        assert!(doc.query_attribute("data-nc-container", "Header").is_some());
    }

    #[test]
    fn test_whitespace_text_dropped() {
        let doc = HtmlParser::new().parse("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>").unwrap();
        let tree = doc.tree();
        let ul = tree
            .descendants(tree.root())
            .find(|(id, _)| tree.tag_name(*id) == Some("ul"))
            .map(|(id, _)| id)
            .unwrap();

        assert_eq!(tree.children(ul).count(), 2);
    }
}
