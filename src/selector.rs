// SPDX-License-Identifier: MPL-2.0
//! Element selectors for picking gallery links out of a document.
//!
//! The document layer supports the subset needed to carve link subsets out
//! of a gallery page: a tag name (`a`), a class (`.thumb`), or both
//! (`a.thumb`). Anything else is rejected at parse time so a typo cannot
//! silently match nothing.

use crate::error::{Error, Result};
use std::fmt;

/// A parsed element selector. The default matches every anchor element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    class: Option<String>,
}

/// Tag the default selector matches.
pub const DEFAULT_TAG: &str = "a";

impl Selector {
    /// Parses a selector string.
    ///
    /// Accepted forms: `tag`, `.class`, `tag.class`. Names may contain
    /// ASCII alphanumerics, `-` and `_`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] for empty input, unsupported syntax
    /// (combinators, attribute selectors, ids), or invalid name characters.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::Selector("empty selector".into()));
        }

        let (tag_part, class_part) = match input.split_once('.') {
            Some((tag, class)) => (tag, Some(class)),
            None => (input, None),
        };

        let tag = if tag_part.is_empty() {
            None
        } else {
            validate_name(tag_part)?;
            Some(tag_part.to_ascii_lowercase())
        };

        let class = match class_part {
            Some(class) => {
                validate_name(class)?;
                Some(class.to_string())
            }
            None => None,
        };

        if tag.is_none() && class.is_none() {
            return Err(Error::Selector(format!("unsupported selector: {input}")));
        }

        Ok(Self { tag, class })
    }

    /// Whether an element with the given tag name and `class` attribute
    /// value (space-separated list) matches this selector.
    pub fn matches(&self, tag: &str, classes: &str) -> bool {
        if let Some(want) = &self.tag {
            if !tag.eq_ignore_ascii_case(want) {
                return false;
            }
        }
        if let Some(want) = &self.class {
            if !classes.split_ascii_whitespace().any(|c| c == want) {
                return false;
            }
        }
        true
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::Selector(format!("invalid name: {name:?}")))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            tag: Some(DEFAULT_TAG.to_string()),
            class: None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(class) = &self.class {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selector_matches_any_anchor() {
        let sel = Selector::default();
        assert!(sel.matches("a", ""));
        assert!(sel.matches("A", "thumb"));
        assert!(!sel.matches("img", ""));
    }

    #[test]
    fn parse_tag_only() {
        let sel = Selector::parse("a").expect("tag selector should parse");
        assert!(sel.matches("a", ""));
        assert!(!sel.matches("div", ""));
    }

    #[test]
    fn parse_class_only_matches_any_tag() {
        let sel = Selector::parse(".gallery").expect("class selector should parse");
        assert!(sel.matches("a", "gallery"));
        assert!(sel.matches("figure", "hero gallery"));
        assert!(!sel.matches("a", "galleries"));
    }

    #[test]
    fn parse_tag_and_class() {
        let sel = Selector::parse("a.thumb").expect("compound selector should parse");
        assert!(sel.matches("a", "thumb small"));
        assert!(!sel.matches("a", "small"));
        assert!(!sel.matches("img", "thumb"));
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let sel = Selector::parse("A").expect("uppercase tag should parse");
        assert!(sel.matches("a", ""));
    }

    #[test]
    fn class_matching_is_case_sensitive() {
        let sel = Selector::parse(".Thumb").expect("class should parse");
        assert!(sel.matches("a", "Thumb"));
        assert!(!sel.matches("a", "thumb"));
    }

    #[test]
    fn rejects_empty_selector() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
        assert!(Selector::parse(".").is_err());
    }

    #[test]
    fn rejects_unsupported_syntax() {
        assert!(Selector::parse("a > img").is_err());
        assert!(Selector::parse("a[href]").is_err());
        assert!(Selector::parse("#main").is_err());
        assert!(Selector::parse("a.b.c").is_err());
    }

    #[test]
    fn display_round_trips() {
        for input in ["a", ".thumb", "a.thumb"] {
            let sel = Selector::parse(input).expect("selector should parse");
            assert_eq!(sel.to_string(), input);
        }
    }
}
