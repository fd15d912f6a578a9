//! Ancillary HTML
//!
//! Loads markup into an [`ancillary_dom::Document`] with html5ever and
//! writes (relocated) trees back out as HTML.

mod parser;
mod serializer;

pub use ancillary_dom::Document;
pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// HTML front-end errors
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
