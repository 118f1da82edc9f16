//! Identifier types for pages and namespaces.
//!
//! A [`PageId`] is an opaque, comparable handle produced by the host. The
//! coordination layer never interprets the name beyond passing it back to
//! the host's services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric namespace identifier as assigned by the host wiki.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(pub i32);

/// The main (article) namespace.
pub const NS_MAIN: NamespaceId = NamespaceId(0);

/// The talk namespace paired with [`NS_MAIN`].
pub const NS_TALK: NamespaceId = NamespaceId(1);

/// The namespace that holds discussion topic pages.
pub const NS_TOPIC: NamespaceId = NamespaceId(2600);

impl NamespaceId {
    /// Returns the raw namespace number.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Talk namespaces are odd-numbered in the host's numbering scheme.
    #[must_use]
    pub const fn is_talk(self) -> bool {
        self.0 >= 0 && self.0 % 2 == 1
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a wiki page: its namespace plus the prefixed page name
/// exactly as the host renders it (e.g. `"Topic:Example/T1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId {
    namespace: NamespaceId,
    name: String,
}

impl PageId {
    /// Creates a page identity. Surrounding whitespace is trimmed; an empty
    /// name is rejected.
    pub fn new(namespace: NamespaceId, name: impl Into<String>) -> crate::Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidPageName(name));
        }
        Ok(Self {
            namespace,
            name: trimmed.to_string(),
        })
    }

    /// Returns the namespace this page lives in.
    #[must_use]
    pub const fn namespace(&self) -> NamespaceId {
        self.namespace
    }

    /// Returns the prefixed page name, the form the rebuild primitive takes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name with any namespace prefix (text up to the first `:`)
    /// removed.
    #[must_use]
    pub fn title_text(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, rest)) if self.namespace != NS_MAIN => rest,
            _ => &self.name,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
