//! Ancillary controller
//!
//! Binds to one base root, indexes its elements and containers once, and
//! on every sync places each element according to the current directives.

use std::fmt;

use ancillary_dom::{Document, DomError, DomTree, NodeId};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::directive::{self, Directive};
use crate::error::{AncillaryError, Result};
use crate::index::{index_tagged, NameIndex};
use crate::positions::{scan_positions, Positions};
use crate::source::{DirectiveSource, HostClass};
use crate::Config;

/// What `sync_element` did with one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No element is indexed under the name; nothing changed
    MissingElement,
    /// The element is now the last child of `container`
    Moved { container: NodeId },
    /// No container resolved and the element was detached
    Detached,
    /// No container resolved and the element was already detached
    Unattached,
    /// The tree refused the move; nothing changed
    Rejected(DomError),
}

/// Relocation controller for one base
pub struct Ancillary {
    base_name: String,
    base: NodeId,
    config: Config,
    elements: NameIndex<NodeId>,
    containers: NameIndex<NodeId>,
    positions: Positions,
    source: Box<dyn DirectiveSource>,
    sink: Box<dyn DiagnosticSink>,
}

impl Ancillary {
    /// Bind to `base` in `document`, reading directives from `<body>`'s class
    pub fn new(document: &Document, base: NodeId, config: Config) -> Result<Self> {
        Self::with_source(document.tree(), base, config, HostClass(document.body()))
    }

    /// Bind to `base`, reading directives from `source`
    pub fn with_source(
        tree: &DomTree,
        base: NodeId,
        config: Config,
        source: impl DirectiveSource + 'static,
    ) -> Result<Self> {
        let base_name = read_base_name(tree, base, &config.base_attribute)?;
        let elements = index_tagged(tree, base, &config.element_attribute);
        let containers = index_tagged(tree, base, &config.container_attribute);

        tracing::debug!(
            "Base \"{}\": indexed {} elements, {} containers",
            base_name,
            elements.len(),
            containers.len()
        );

        Ok(Self {
            base_name,
            base,
            config,
            elements,
            containers,
            positions: Positions::new(),
            source: Box::new(source),
            sink: Box::new(TracingSink),
        })
    }

    /// Replace the diagnostic sink used when `debug` is enabled
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Parse a class name as a directive for `base_name`
    pub fn parse(token: &str, base_name: &str) -> Option<Directive> {
        directive::parse(token, base_name)
    }

    /// Parse a class name as a directive for this controller's base
    pub fn parse_directive(&self, token: &str) -> Option<Directive> {
        directive::parse(token, &self.base_name)
    }

    /// Re-read directives and place every indexed element.
    ///
    /// Elements without a directive are detached. Running sync again
    /// without changes keeps every element under the same parent.
    pub fn sync(&mut self, tree: &mut DomTree) {
        self.positions = self
            .source
            .class_names(tree)
            .map(|classes| scan_positions(&classes, &self.base_name))
            .unwrap_or_default();

        for (name, _) in self.elements.iter() {
            self.sync_element(tree, name, self.positions.container_for(name));
        }
    }

    /// Place one element.
    ///
    /// A resolvable container receives the element as its last child.
    /// Otherwise an attached element is detached.
    pub fn sync_element(
        &self,
        tree: &mut DomTree,
        element_name: &str,
        container_name: Option<&str>,
    ) -> Placement {
        let Some(&element) = self.elements.get(element_name) else {
            if self.config.debug {
                self.sink.missing_element(element_name);
            }
            return Placement::MissingElement;
        };

        let container = container_name.and_then(|name| Some((name, *self.containers.get(name)?)));
        if let Some((container_name, container)) = container {
            return match tree.append_child(container, element) {
                Ok(()) => Placement::Moved { container },
                Err(err) => {
                    if self.config.debug {
                        self.sink.rejected_move(element_name, container_name, &err);
                    }
                    Placement::Rejected(err)
                }
            };
        }

        if tree.remove(element) {
            if self.config.debug {
                self.sink.missing_container(container_name, element_name);
            }
            Placement::Detached
        } else {
            Placement::Unattached
        }
    }

    /// Rebuild the element and container tables from the base subtree.
    ///
    /// Elements a previous sync detached are no longer under the base; they
    /// stay indexed unless the subtree now holds another element by that name.
    pub fn reindex(&mut self, tree: &DomTree) {
        let mut elements = index_tagged(tree, self.base, &self.config.element_attribute);
        for (name, &id) in self.elements.iter() {
            if tree.parent(id).is_none() && !elements.contains(name) {
                elements.insert(name, id);
            }
        }

        self.elements = elements;
        self.containers = index_tagged(tree, self.base, &self.config.container_attribute);
    }

    /// Lowercased base name
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn base(&self) -> NodeId {
        self.base
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elements(&self) -> &NameIndex<NodeId> {
        &self.elements
    }

    pub fn containers(&self) -> &NameIndex<NodeId> {
        &self.containers
    }

    /// Positions computed by the last sync
    pub fn positions(&self) -> &Positions {
        &self.positions
    }
}

impl fmt::Debug for Ancillary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancillary")
            .field("base_name", &self.base_name)
            .field("base", &self.base)
            .field("config", &self.config)
            .field("elements", &self.elements)
            .field("containers", &self.containers)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}

fn read_base_name(tree: &DomTree, base: NodeId, attribute: &str) -> Result<String> {
    let name = tree
        .get_attribute(base, attribute)
        .ok_or_else(|| AncillaryError::InvalidBase {
            node: base,
            attribute: attribute.to_string(),
        })?;

    if name.is_empty() {
        return Err(AncillaryError::EmptyBaseName {
            node: base,
            attribute: attribute.to_string(),
        });
    }

    Ok(name.to_lowercase())
}
