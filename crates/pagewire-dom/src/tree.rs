//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; detaching a node only unlinks it. A page's
//! structure is authored once and grows by a handful of generated controls,
//! so the arena stays small.

use std::borrow::Cow;

use crate::{
    CssStyleDeclaration, DOMStringMap, DOMTokenList, ElementData, InternedString, Node,
    NodeId, SelectorError, SelectorList, StringInterner,
};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
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
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, document node included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve an interned name
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name.to_string()))
    }

    /// Append `child` as last child of `parent`, detaching it first.
    ///
    /// Returns false if either id is invalid or the append would create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.get(parent).is_none() || self.get(child).is_none() || child == NodeId::ROOT {
            return false;
        }
        if self.ancestors(parent).any(|a| a == child) {
            tracing::debug!("refusing to append {} under its own descendant {}", child, parent);
            return false;
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        true
    }

    /// Unlink a node from its parent and siblings; its subtree stays intact
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Walk from `node` up to the document node, `node` first
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        let next = if self.get(node).is_some() { node } else { NodeId::NONE };
        Ancestors { tree: self, next }
    }

    /// All descendants of `root` in document (pre-)order, `root` excluded
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).map(|(id, _)| id).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let first = stack.len();
            stack.extend(self.children(id).map(|(c, _)| c));
            stack[first..].reverse();
        }
        out
    }

    /// Check whether `node` is `ancestor` or lies beneath it
    pub fn is_inclusive_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.get(node).and_then(Node::as_element)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        self.get_mut(node).and_then(Node::as_element_mut)
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| self.resolve(e.name))
    }

    /// Attribute value; `class` and `style` are serialized from their live views
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<Cow<'_, str>> {
        let elem = self.element(node)?;
        match name {
            "id" => elem.id.as_deref().map(Cow::Borrowed),
            "class" => (!elem.class_list.is_empty()).then(|| Cow::Owned(elem.class_list.value())),
            "style" => (!elem.style.is_empty()).then(|| Cow::Owned(elem.style.css_text())),
            _ => {
                let key = self.interner.lookup(name)?;
                elem.get_attr(key).map(Cow::Borrowed)
            }
        }
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Set an attribute; returns false for non-elements
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let key = self.interner.intern(&name);
        let Some(elem) = self.element_mut(node) else {
            return false;
        };
        match name.as_str() {
            "id" => elem.id = Some(value.to_string()),
            "class" => elem.class_list.set_value(value),
            "style" => elem.style = CssStyleDeclaration::parse(value),
            _ => elem.set_attr(key, value.to_string()),
        }
        true
    }

    pub fn class_list(&self, node: NodeId) -> Option<&DOMTokenList> {
        self.element(node).map(|e| &e.class_list)
    }

    pub fn class_list_mut(&mut self, node: NodeId) -> Option<&mut DOMTokenList> {
        self.element_mut(node).map(|e| &mut e.class_list)
    }

    /// Shorthand for `class_list(node).contains(class)`
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.class_list(node).is_some_and(|c| c.contains(class))
    }

    /// Add a class; returns true if it was newly added
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        self.class_list_mut(node).is_some_and(|c| c.add(&[class]))
    }

    /// Remove a class; returns true if it was present
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        self.class_list_mut(node).is_some_and(|c| c.remove(&[class]))
    }

    pub fn style(&self, node: NodeId) -> Option<&CssStyleDeclaration> {
        self.element(node).map(|e| &e.style)
    }

    pub fn style_mut(&mut self, node: NodeId) -> Option<&mut CssStyleDeclaration> {
        self.element_mut(node).map(|e| &mut e.style)
    }

    /// Snapshot of the element's `data-*` attributes
    pub fn dataset(&self, node: NodeId) -> DOMStringMap {
        match self.element(node) {
            Some(elem) => DOMStringMap::from_attributes(
                elem.attrs.iter().map(|a| (self.resolve(a.name), a.value.as_str())),
            ),
            None => DOMStringMap::new(),
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, node: NodeId) -> String {
        if let Some(text) = self.get(node).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(node)
            .into_iter()
            .filter_map(|id| self.get(id).and_then(Node::as_text))
            .collect()
    }

    /// First element under `root` (exclusive) matching a parsed selector
    pub fn query_selector_matching(&self, root: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }

    /// All elements under `root` (exclusive) matching a parsed selector, in document order
    pub fn query_selector_all_matching(&self, root: NodeId, selector: &SelectorList) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    /// Nearest inclusive ancestor matching a parsed selector
    pub fn closest_matching(&self, node: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.ancestors(node).find(|&id| selector.matches(self, id))
    }

    pub fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.query_selector_matching(root, &selector))
    }

    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.query_selector_all_matching(root, &selector))
    }

    pub fn closest(&self, node: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.closest_matching(node, &selector))
    }

    pub fn matches(&self, node: NodeId, selector: &str) -> Result<bool, SelectorError> {
        Ok(SelectorList::parse(selector)?.matches(self, node))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator walking up the parent chain
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.parent;
        Some(id)
    }
}
