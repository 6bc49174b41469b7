//! Edge case tests for pagewire-dom
//!
//! Boundary conditions of the tree, class lists, selectors and geometry.

use pagewire_dom::{
    CssStyleDeclaration, DOMRect, DOMStringMap, DOMTokenList, Document, DomTree, NodeData, NodeId,
    SelectorError, SelectorList, StringInterner,
};

// ============================================================================
// STRING INTERNER
// ============================================================================

#[test]
fn test_interner_empty_string_is_zero() {
    let mut interner = StringInterner::new();
    let id = interner.intern("");
    assert_eq!(id.0, 0);
    assert_eq!(interner.get(id), "");
}

#[test]
fn test_interner_unicode() {
    let mut interner = StringInterner::new();
    for s in ["hello", "世界", "Ñoño", "Привет", "🚀"] {
        let id = interner.intern(s);
        assert_eq!(interner.get(id), s);
    }
}

#[test]
fn test_interner_is_deduplicating() {
    let mut interner = StringInterner::new();
    let before = interner.len();
    let a = interner.intern("operations__tab");
    let b = interner.intern("operations__tab");
    assert_eq!(a, b);
    assert_eq!(interner.len(), before + 1);
    assert_eq!(interner.lookup("never-seen"), None);
}

// ============================================================================
// TREE STRUCTURE
// ============================================================================

#[test]
fn test_append_to_invalid_parent() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    assert!(!tree.append_child(NodeId::NONE, div));
    assert!(!tree.append_child(tree.root(), NodeId::NONE));
}

#[test]
fn test_root_cannot_be_appended() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(tree.root(), div);
    assert!(!tree.append_child(div, NodeId::ROOT));
}

#[test]
fn test_append_into_own_subtree_is_refused() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div");
    let inner = tree.create_element("div");
    tree.append_child(tree.root(), outer);
    tree.append_child(outer, inner);

    assert!(!tree.append_child(inner, outer));
    assert!(!tree.append_child(outer, outer));
    assert_eq!(tree.get(inner).map(|n| n.parent), Some(outer));
}

#[test]
fn test_reappend_moves_node() {
    let mut tree = DomTree::new();
    let a = tree.create_element("div");
    let b = tree.create_element("div");
    let child = tree.create_element("span");
    tree.append_child(tree.root(), a);
    tree.append_child(tree.root(), b);
    tree.append_child(a, child);

    assert!(tree.append_child(b, child));
    assert_eq!(tree.children(a).count(), 0);
    assert_eq!(tree.children(b).map(|(id, _)| id).collect::<Vec<_>>(), vec![child]);
}

#[test]
fn test_detach_middle_sibling() {
    let mut tree = DomTree::new();
    let parent = tree.create_element("ul");
    tree.append_child(tree.root(), parent);
    let items: Vec<_> = (0..3)
        .map(|_| {
            let li = tree.create_element("li");
            tree.append_child(parent, li);
            li
        })
        .collect();

    tree.detach(items[1]);
    let left: Vec<_> = tree.children(parent).map(|(id, _)| id).collect();
    assert_eq!(left, vec![items[0], items[2]]);

    // Detaching twice is harmless
    tree.detach(items[1]);
    assert_eq!(tree.children(parent).count(), 2);
}

#[test]
fn test_descendants_document_order() {
    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    let a = tree.create_element("div");
    let a1 = tree.create_element("span");
    let b = tree.create_element("div");
    tree.append_child(tree.root(), body);
    tree.append_child(body, a);
    tree.append_child(a, a1);
    tree.append_child(body, b);

    assert_eq!(tree.descendants(body), vec![a, a1, b]);
    assert!(tree.descendants(b).is_empty());
}

#[test]
fn test_deep_nesting() {
    let mut tree = DomTree::new();
    let mut parent = tree.root();
    for _ in 0..500 {
        let div = tree.create_element("div");
        tree.append_child(parent, div);
        parent = div;
    }
    assert_eq!(tree.ancestors(parent).count(), 501);
    assert_eq!(tree.descendants(tree.root()).len(), 500);
}

#[test]
fn test_operations_on_text_nodes() {
    let mut tree = DomTree::new();
    let text = tree.create_text("Learn more");
    assert!(!tree.set_attribute(text, "class", "x"));
    assert!(!tree.add_class(text, "x"));
    assert!(tree.style_mut(text).is_none());
    assert_eq!(tree.text_content(text), "Learn more");
    assert!(matches!(tree.get(text).map(|n| &n.data), Some(NodeData::Text(_))));
}

// ============================================================================
// ATTRIBUTES, CLASSES, STYLE
// ============================================================================

#[test]
fn test_class_attribute_and_list_stay_in_sync() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.set_attribute(div, "class", "modal  hidden modal");
    assert_eq!(tree.attribute(div, "class").as_deref(), Some("modal hidden"));

    tree.remove_class(div, "hidden");
    assert_eq!(tree.attribute(div, "class").as_deref(), Some("modal"));

    tree.remove_class(div, "modal");
    assert_eq!(tree.attribute(div, "class"), None);
}

#[test]
fn test_style_attribute_and_declaration_stay_in_sync() {
    let mut tree = DomTree::new();
    let slide = tree.create_element("div");
    tree.set_attribute(slide, "style", "transform: translateX(100%)");

    if let Some(style) = tree.style_mut(slide) {
        style.set_property("opacity", "0.5");
    }
    assert_eq!(
        tree.attribute(slide, "style").as_deref(),
        Some("transform: translateX(100%); opacity: 0.5;")
    );
    assert!(tree.set_attribute(slide, "style", ""));
    assert!(tree.style(slide).is_some_and(CssStyleDeclaration::is_empty));
    assert_eq!(tree.attribute(slide, "style"), None);
}

#[test]
fn test_attribute_names_are_case_insensitive_on_set() {
    let mut tree = DomTree::new();
    let img = tree.create_element("IMG");
    tree.set_attribute(img, "DATA-SRC", "img/card.jpg");
    assert_eq!(tree.tag_name(img), Some("img"));
    assert_eq!(tree.attribute(img, "data-src").as_deref(), Some("img/card.jpg"));
}

#[test]
fn test_dataset_camel_case() {
    let mut tree = DomTree::new();
    let button = tree.create_element("button");
    tree.set_attribute(button, "data-scroll-to", "#section--1");
    tree.set_attribute(button, "data-tab", "2");
    tree.set_attribute(button, "aria-label", "scroll");

    let dataset = tree.dataset(button);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.get("scrollTo"), Some("#section--1"));
    assert_eq!(dataset.get("tab"), Some("2"));
    assert_eq!(DOMStringMap::to_attribute_name("scrollTo"), "data-scroll-to");
}

#[test]
fn test_token_list_edge_cases() {
    let mut list = DOMTokenList::from_string("  ");
    assert!(list.is_empty());
    assert!(!list.add(&[""]));

    assert!(list.toggle("sticky", None));
    assert!(!list.toggle("sticky", None));
    assert!(list.toggle("sticky", Some(true)));
    assert!(list.toggle("sticky", Some(true)));
    assert_eq!(list.length(), 1);

    list.add(&["a", "b"]);
    assert!(list.replace("a", "b"));
    assert_eq!(list.value(), "sticky b");
    assert!(!list.replace("missing", "c"));
}

#[test]
fn test_style_empty_value_removes() {
    let mut style = CssStyleDeclaration::parse("opacity: 1; ; broken; color:");
    assert_eq!(style.len(), 1);
    style.set_property("opacity", "");
    assert!(style.is_empty());
}

// ============================================================================
// SELECTORS
// ============================================================================

#[test]
fn test_selector_list_with_spaces_around_commas() {
    let list = SelectorList::parse(".nav__logo , .nav__link").unwrap();
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();
    let logo = tree.create_element("img");
    tree.add_class(logo, "nav__logo");
    tree.append_child(body, logo);

    assert!(list.matches(doc.tree(), logo));
    assert!(!list.matches(doc.tree(), body));
}

#[test]
fn test_selector_errors() {
    assert_eq!(SelectorList::parse(""), Err(SelectorError::Empty));
    assert_eq!(SelectorList::parse("a,"), Err(SelectorError::Empty));
    assert!(matches!(SelectorList::parse("a:hover"), Err(SelectorError::Unsupported { found: ':', .. })));
    assert!(matches!(SelectorList::parse("div > p"), Err(SelectorError::Unsupported { .. })));
}

#[test]
fn test_attribute_value_selector() {
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();
    let dot = tree.create_element("button");
    tree.set_attribute(dot, "data-slide", "3");
    tree.append_child(body, dot);

    assert_eq!(doc.query_selector("[data-slide='3']").unwrap(), Some(dot));
    assert_eq!(doc.query_selector("[data-slide=\"4\"]").unwrap(), None);
    assert_eq!(doc.query_selector("button[data-slide]").unwrap(), Some(dot));
}

#[test]
fn test_closest_is_inclusive() {
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();
    let tab = tree.create_element("button");
    tree.add_class(tab, "operations__tab");
    let label = tree.create_element("span");
    tree.append_child(body, tab);
    tree.append_child(tab, label);

    let tree = doc.tree();
    assert_eq!(tree.closest(label, ".operations__tab").unwrap(), Some(tab));
    assert_eq!(tree.closest(tab, ".operations__tab").unwrap(), Some(tab));
    assert_eq!(tree.closest(body, ".operations__tab").unwrap(), None);
}

#[test]
fn test_query_selector_excludes_root() {
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();
    tree.add_class(body, "page");
    let inner = tree.create_element("div");
    tree.add_class(inner, "page");
    tree.append_child(body, inner);

    assert_eq!(doc.tree().query_selector(body, ".page").unwrap(), Some(inner));
    assert_eq!(doc.query_selector_all(".page").unwrap(), vec![body, inner]);
}

// ============================================================================
// GEOMETRY
// ============================================================================

#[test]
fn test_rect_touching_edges() {
    let a = DOMRect::from_xywh(0.0, 0.0, 100.0, 100.0);
    let b = DOMRect::from_xywh(0.0, 100.0, 100.0, 100.0);
    let hit = a.intersection(&b).unwrap();
    assert_eq!(hit.area(), 0.0);

    let c = DOMRect::from_xywh(0.0, 100.5, 100.0, 100.0);
    assert!(a.intersection(&c).is_none());
}

#[test]
fn test_rect_negative_expand_can_invert() {
    let viewport = DOMRect::from_xywh(0.0, 0.0, 100.0, 100.0);
    let shrunk = viewport.expand(-60.0, -60.0, -60.0, -60.0);
    assert!(shrunk.width < 0.0);
    assert!(shrunk.intersection(&viewport).is_none());
}
