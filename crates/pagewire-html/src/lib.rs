//! pagewire HTML Parser
//!
//! HTML5 parsing built on html5ever; the output is a `pagewire_dom::Document`.

mod parser;

pub use parser::HtmlParser;

use pagewire_dom::Document;

/// Parse an HTML string into a Document with base URL `about:blank`
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("document has no <body> element")]
    MissingBody,
}
