//! DOMStringMap (dataset)
//!
//! Snapshot view of an element's `data-*` attributes keyed in camelCase,
//! so `data-scroll-to` reads as `scrollTo`.

use std::collections::BTreeMap;

/// DOMStringMap for data-* attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMStringMap {
    data: BTreeMap<String, String>,
}

impl DOMStringMap {
    /// Create empty string map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from (name, value) attribute pairs, keeping only data-*
    pub fn from_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let data = attrs
            .into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix("data-")
                    .map(|key| (to_camel_case(key), value.to_string()))
            })
            .collect();
        Self { data }
    }

    /// Get value by camelCase key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Check if key exists
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get all keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Convert a camelCase key to its attribute name
    pub fn to_attribute_name(key: &str) -> String {
        format!("data-{}", to_kebab_case(key))
    }
}

/// Convert kebab-case to camelCase
fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert camelCase to kebab-case
fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let attrs = [
            ("data-scroll-to", "#section--1"),
            ("data-slide", "2"),
            ("class", "ignored"),
        ];

        let map = DOMStringMap::from_attributes(attrs);

        assert_eq!(map.get("scrollTo"), Some("#section--1"));
        assert_eq!(map.get("slide"), Some("2"));
        assert!(!map.has("class"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("scroll-to"), "scrollTo");
        assert_eq!(to_camel_case("src"), "src");
    }

    #[test]
    fn test_attribute_name() {
        assert_eq!(DOMStringMap::to_attribute_name("scrollTo"), "data-scroll-to");
        assert_eq!(DOMStringMap::to_attribute_name("tab"), "data-tab");
    }
}
