//! Document - High-level document API

use crate::{DomTree, NodeId, SelectorError, SelectorList};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure); call `finalize` after filling it
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        let find_child = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .map(|(id, _)| id)
                .find(|&id| tree.tag_name(id) == Some(tag))
                .unwrap_or(NodeId::NONE)
        };

        self.html_element = find_child(&self.tree, self.tree.root(), "html");
        self.head_element = find_child(&self.tree, self.html_element, "head");
        self.body_element = find_child(&self.tree, self.html_element, "body");
    }

    /// Document URL, used as the base for relative resource URLs
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first `<title>` in `<head>`
    pub fn title(&self) -> String {
        self.tree
            .children(self.head_element)
            .map(|(id, _)| id)
            .find(|&id| self.tree.tag_name(id) == Some("title"))
            .map(|id| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| {
                self.tree
                    .get(node)
                    .and_then(|n| n.as_element())
                    .is_some_and(|e| e.id.as_deref() == Some(id))
            })
    }

    /// `document.querySelector`
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        self.tree.query_selector(self.tree.root(), selector)
    }

    /// `document.querySelectorAll`
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.tree.query_selector_all(self.tree.root(), selector)
    }

    pub fn query_selector_matching(&self, selector: &SelectorList) -> Option<NodeId> {
        self.tree.query_selector_matching(self.tree.root(), selector)
    }

    pub fn query_selector_all_matching(&self, selector: &SelectorList) -> Vec<NodeId> {
        self.tree.query_selector_all_matching(self.tree.root(), selector)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new("https://example.com/");
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
        assert_eq!(doc.tree().get(doc.head()).unwrap().parent, doc.document_element());
        assert_eq!(doc.url(), "https://example.com/");
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::default();
        let section = doc.tree.create_element("section");
        let body = doc.body();
        doc.tree.append_child(body, section);
        doc.tree.set_attribute(section, "id", "section--1");

        assert_eq!(doc.get_element_by_id("section--1"), Some(section));
        assert_eq!(doc.query_selector("#section--1").unwrap(), Some(section));
        assert_eq!(doc.get_element_by_id("section--9"), None);
    }

    #[test]
    fn test_finalize_empty() {
        let mut doc = Document::empty("about:blank");
        doc.finalize();
        assert!(!doc.body().is_valid());
        assert_eq!(doc.title(), "");
    }

    #[test]
    fn test_title() {
        let mut doc = Document::default();
        let title = doc.tree.create_element("title");
        let text = doc.tree.create_text("  Bankside | Home ");
        let head = doc.head();
        doc.tree.append_child(head, title);
        doc.tree.append_child(title, text);
        assert_eq!(doc.title(), "Bankside | Home");
    }
}
