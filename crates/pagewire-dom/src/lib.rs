//! pagewire DOM - Document Object Model
//!
//! Arena-backed DOM tree sized for a single hand-authored page: elements,
//! text, class lists, `data-*` attributes, inline styles and the small
//! selector subset the page behaviors query with.

mod classlist;
mod dataset;
mod document;
mod geometry;
mod interner;
mod node;
mod selector;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use dataset::DOMStringMap;
pub use document::Document;
pub use geometry::DOMRect;
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::{Selector, SelectorError, SelectorList};
pub use style::CssStyleDeclaration;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
