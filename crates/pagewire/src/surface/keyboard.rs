//! Keyboard keys
//!
//! `KeyboardEvent.key` values the page reacts to, plus a catch-all.

/// Key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable single character
    Character(char),
    ArrowLeft,
    ArrowRight,
    Escape,
    /// Anything else, kept verbatim
    Unidentified(String),
}

impl Key {
    /// Parse from a `KeyboardEvent.key` string
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified(s.to_string()),
                }
            }
        }
    }
}
