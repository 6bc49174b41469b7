//! Setup errors
//!
//! A unit whose required markup is missing fails to attach and stays
//! inert; the rest of the page is unaffected.

use pagewire_dom::{Document, NodeId, SelectorError, SelectorList};

use crate::surface::RootMarginError;

/// Unit setup error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("no elements match `{selector}`")]
    EmptyCollection { selector: String },

    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },

    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    RootMargin(#[from] RootMarginError),
}

/// Parse a configured selector
pub(crate) fn selector(source: &str) -> Result<SelectorList, SetupError> {
    Ok(SelectorList::parse(source)?)
}

/// Selector for a bare class name
pub(crate) fn class_selector(class: &str) -> Result<SelectorList, SetupError> {
    selector(&format!(".{class}"))
}

/// First element matching `source`, or `MissingElement`
pub(crate) fn require(document: &Document, source: &str) -> Result<NodeId, SetupError> {
    document
        .query_selector_matching(&selector(source)?)
        .ok_or_else(|| SetupError::MissingElement { selector: source.to_string() })
}

/// All elements matching `source`, possibly none
pub(crate) fn find_all(document: &Document, source: &str) -> Result<Vec<NodeId>, SetupError> {
    Ok(document.query_selector_all_matching(&selector(source)?))
}

/// All elements matching `source`, or `EmptyCollection`
pub(crate) fn require_all(document: &Document, source: &str) -> Result<Vec<NodeId>, SetupError> {
    let nodes = find_all(document, source)?;
    if nodes.is_empty() {
        return Err(SetupError::EmptyCollection { selector: source.to_string() });
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_selector() {
        let doc = Document::default();
        assert_eq!(
            require(&doc, ".modal"),
            Err(SetupError::MissingElement { selector: ".modal".into() })
        );
        assert_eq!(
            require_all(&doc, ".slide"),
            Err(SetupError::EmptyCollection { selector: ".slide".into() })
        );
        assert_eq!(find_all(&doc, ".section"), Ok(vec![]));
    }

    #[test]
    fn test_bad_selector() {
        let doc = Document::default();
        assert!(matches!(require(&doc, ".nav > a"), Err(SetupError::Selector(_))));
    }
}
