//! Core types used throughout the project.

use std::fmt;

/// A language/region variant for a generated bundle file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    /// The unsuffixed default/fallback variant.
    Root,
    /// A named variant such as `ko` or `en_US`; the tag is used verbatim as
    /// the filename suffix.
    Named(String),
}

impl Locale {
    /// Creates a named locale from a tag.
    #[must_use]
    pub fn named(tag: impl Into<String>) -> Self {
        Self::Named(tag.into())
    }

    /// Returns true for the default/root variant.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Returns the filename suffix, or `None` for the root variant.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Named(tag) => Some(tag),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("(root)"),
            Self::Named(tag) => f.write_str(tag),
        }
    }
}
