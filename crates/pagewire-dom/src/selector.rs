//! Selectors
//!
//! Compound simple selectors (`img[data-src]`, `.operations__tab--2`,
//! `button.dots__dot[data-slide="0"]`, `#section--1`, `*`) and comma lists
//! of them. Combinators and pseudo-classes are rejected.

use crate::{DomTree, NodeId};

/// Selector parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported selector syntax {found:?} in `{selector}`")]
    Unsupported { selector: String, found: char },

    #[error("expected a name after `{after}` in `{selector}`")]
    MissingName { selector: String, after: char },

    #[error("unterminated attribute selector in `{selector}`")]
    Unterminated { selector: String },
}

/// `[name]` or `[name=value]`
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrSelector {
    name: String,
    value: Option<String>,
}

/// One compound selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrSelector>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// Parse a single compound selector
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let s = source.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let mut chars = s.chars().peekable();

        let read_name = |chars: &mut std::iter::Peekable<std::str::Chars<'_>>| {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if !is_name_char(c) {
                    break;
                }
                name.push(c);
                chars.next();
            }
            name
        };

        match chars.peek() {
            Some('*') => {
                chars.next();
            }
            Some(&c) if is_name_char(c) => {
                selector.tag = Some(read_name(&mut chars).to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(c) = chars.next() {
            match c {
                '#' | '.' => {
                    let name = read_name(&mut chars);
                    if name.is_empty() {
                        return Err(SelectorError::MissingName { selector: s.to_string(), after: c });
                    }
                    if c == '#' {
                        selector.id = Some(name);
                    } else {
                        selector.classes.push(name);
                    }
                }
                '[' => {
                    let name = read_name(&mut chars);
                    if name.is_empty() {
                        return Err(SelectorError::MissingName { selector: s.to_string(), after: c });
                    }
                    let value = match chars.next() {
                        Some(']') => None,
                        Some('=') => {
                            let mut value = String::new();
                            let mut closed = false;
                            for c in chars.by_ref() {
                                if c == ']' {
                                    closed = true;
                                    break;
                                }
                                value.push(c);
                            }
                            if !closed {
                                return Err(SelectorError::Unterminated { selector: s.to_string() });
                            }
                            Some(value.trim().trim_matches(|q| q == '"' || q == '\'').to_string())
                        }
                        _ => return Err(SelectorError::Unterminated { selector: s.to_string() }),
                    };
                    selector.attrs.push(AttrSelector { name: name.to_ascii_lowercase(), value });
                }
                other => {
                    return Err(SelectorError::Unsupported { selector: s.to_string(), found: other });
                }
            }
        }

        Ok(selector)
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Some(elem) = tree.get(node).and_then(|n| n.as_element()) else {
            return false;
        };

        if let Some(tag) = &self.tag {
            if tree.resolve(elem.name) != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| elem.class_list.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match tree.attribute(node, &attr.name) {
            Some(value) => attr.value.as_deref().is_none_or(|want| value == want),
            None => false,
        })
    }
}

/// Comma-separated selector list; matches when any member matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let selectors = source
            .split(',')
            .map(Selector::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { selectors })
    }

    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(tree, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("button.dots__dot.dots__dot--active[data-slide=\"2\"]").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("button"));
        assert_eq!(sel.classes, vec!["dots__dot", "dots__dot--active"]);
        assert_eq!(sel.attrs[0].value.as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_id_and_universal() {
        let sel = Selector::parse("#section--1").unwrap();
        assert_eq!(sel.id.as_deref(), Some("section--1"));
        assert_eq!(Selector::parse("*").unwrap(), Selector::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse(".nav .nav__link"),
            Err(SelectorError::Unsupported { found: ' ', .. })
        ));
        assert!(matches!(Selector::parse("img[data-src"), Err(SelectorError::Unterminated { .. })));
        assert!(matches!(Selector::parse("a."), Err(SelectorError::MissingName { after: '.', .. })));
    }

    #[test]
    fn test_list_matches_any() {
        let mut tree = DomTree::new();
        let img = tree.create_element("img");
        tree.append_child(tree.root(), img);
        tree.set_attribute(img, "data-src", "img/digital.jpg");

        let list = SelectorList::parse(".missing, img[data-src]").unwrap();
        assert!(list.matches(&tree, img));
        assert!(!SelectorList::parse("img[data-src=other.jpg]").unwrap().matches(&tree, img));
    }
}
