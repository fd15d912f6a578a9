//! Controller configuration

use serde::{Deserialize, Serialize};

/// Attribute naming the base root; its value is the base name
pub const DEFAULT_BASE_ATTRIBUTE: &str = "data-nc-base";
/// Attribute naming a relocatable element
pub const DEFAULT_ELEMENT_ATTRIBUTE: &str = "data-nc-element";
/// Attribute naming a container
pub const DEFAULT_CONTAINER_ATTRIBUTE: &str = "data-nc-container";

/// Controller configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report missing elements and containers to the diagnostic sink
    pub debug: bool,

    /// Attribute on the base root
    pub base_attribute: String,

    /// Attribute on relocatable elements
    pub element_attribute: String,

    /// Attribute on containers
    pub container_attribute: String,
}

impl Config {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            base_attribute: DEFAULT_BASE_ATTRIBUTE.to_string(),
            element_attribute: DEFAULT_ELEMENT_ATTRIBUTE.to_string(),
            container_attribute: DEFAULT_CONTAINER_ATTRIBUTE.to_string(),
        }
    }
}
