//! Directive matching.
//!
//! # Design Decisions
//! - A name ending in `-` claims every directive starting with it
//!   (`listen-` matches `listen-udp`, `listen-mgmt`, ...)
//! - Otherwise the first field must equal the name exactly
//! - An empty name never matches

use crate::options::ConfigOption;

/// Compiled form of a directive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveMatcher {
    Exact(String),
    Prefix(String),
    Never,
}

impl DirectiveMatcher {
    pub fn new(directive: impl Into<String>) -> Self {
        let directive = directive.into();
        if directive.is_empty() {
            DirectiveMatcher::Never
        } else if directive.ends_with('-') {
            DirectiveMatcher::Prefix(directive)
        } else {
            DirectiveMatcher::Exact(directive)
        }
    }

    /// Returns true if `option` is one of this matcher's directives.
    pub fn matches(&self, option: &ConfigOption) -> bool {
        match (self, option.name()) {
            (DirectiveMatcher::Exact(d), Some(name)) => name == d,
            (DirectiveMatcher::Prefix(p), Some(name)) => name.starts_with(p.as_str()),
            _ => false,
        }
    }
}

/// Returns true if `option` selects `directive`.
pub fn matches(directive: &str, option: &ConfigOption) -> bool {
    DirectiveMatcher::new(directive).matches(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(fields: &[&str]) -> ConfigOption {
        ConfigOption::new(fields.iter().copied())
    }

    #[test]
    fn test_exact_match() {
        assert!(matches("listen", &opt(&["listen", "0.0.0.0", "1194"])));
        assert!(!matches("listen", &opt(&["listen-udp", "0.0.0.0", "1194"])));
        assert!(!matches("listen", &opt(&["lis"])));
    }

    #[test]
    fn test_prefix_match() {
        assert!(matches("listen-", &opt(&["listen-udp", "0.0.0.0", "1194"])));
        assert!(matches("listen-", &opt(&["listen-"])));
        assert!(!matches("listen-", &opt(&["listen", "0.0.0.0", "1194"])));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!matches("", &opt(&["listen"])));
        assert!(!matches("listen", &opt(&[])));
        assert_eq!(DirectiveMatcher::new(""), DirectiveMatcher::Never);
    }
}
