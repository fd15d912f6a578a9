//! Position scanning
//!
//! Builds the element → container mapping from the class names on the
//! directive host.

use ancillary_dom::DOMTokenList;

use crate::NameIndex;
use crate::directive::{find_directive, parse};

/// Element name → container name, in the order directives appeared
pub type Positions = NameIndex<String>;

impl NameIndex<String> {
    /// Container assigned to `element_name`, if any
    pub fn container_for(&self, element_name: &str) -> Option<&str> {
        self.get(element_name).map(String::as_str)
    }
}

/// Collect every directive for `base_name` in a class attribute value.
///
/// Later directives for the same element win. An empty attribute yields an
/// empty mapping.
pub fn scan_positions(class_attr: &str, base_name: &str) -> Positions {
    let mut positions = Positions::new();

    for token in DOMTokenList::from_string(class_attr).iter() {
        let Some(matched) = find_directive(token, base_name) else {
            continue;
        };
        match parse(matched, base_name) {
            Some(directive) => {
                positions.insert(directive.element_name, directive.container_name);
            }
            None => tracing::trace!("Ignoring malformed directive \"{}\"", matched),
        }
    }

    positions
}
