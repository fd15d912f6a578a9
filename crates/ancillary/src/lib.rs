//! Ancillary
//!
//! Moves "ancillary" elements of a page into named containers, driven by
//! position directives carried as class names on the document body:
//!
//! ```text
//! <body class="ancillary-theme-cart-position-header">
//!   <div data-nc-base="theme">
//!     <header data-nc-container="header"></header>
//!     <footer data-nc-container="footer">
//!       <div data-nc-element="cart">...</div>
//!     </footer>
//!   </div>
//! </body>
//! ```
//!
//! After [`Ancillary::sync`] the cart is the last child of the header.
//! Elements whose directive names no known container are detached.
//!
//! # Example
//! ```rust,ignore
//! use ancillary::{Ancillary, Config};
//!
//! let base = doc.query_attribute("data-nc-base", "theme").unwrap();
//! let mut ancillary = Ancillary::new(&doc, base, Config::default())?;
//! ancillary.sync(doc.tree_mut());
//! ```

mod config;
mod controller;
mod diagnostics;
mod directive;
mod error;
mod index;
mod positions;
mod source;

pub use config::{
    Config, DEFAULT_BASE_ATTRIBUTE, DEFAULT_CONTAINER_ATTRIBUTE, DEFAULT_ELEMENT_ATTRIBUTE,
};
pub use controller::{Ancillary, Placement};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use directive::{parse, Directive, MAX_ELEMENT_NAME_LEN};
pub use error::{AncillaryError, Result};
pub use index::{index_tagged, NameIndex};
pub use positions::{scan_positions, Positions};
pub use source::{DirectiveSource, HostClass};

// Re-export the DOM for callers building trees by hand
pub use ancillary_dom as dom;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
