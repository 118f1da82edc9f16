//! Semantic facts for one page's index entry.
//!
//! [`SemanticData`] is owned by the indexing engine for the duration of a
//! single update lifecycle. The hooks only read its subject and append
//! statements to it before commit.

use crate::ids::PageId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a semantic property, e.g. `"_TOPIC_OWNER"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a property key. Keys may not be empty or contain whitespace.
    pub fn new(key: impl Into<String>) -> crate::Result<Self> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(crate::Error::InvalidPropertyKey(key));
        }
        Ok(Self(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The value side of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Page(PageId),
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Unix seconds.
    Date(i64),
}

/// One `(property, value)` fact about the subject page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub property: PropertyKey,
    pub value: PropertyValue,
}

impl Statement {
    #[must_use]
    pub fn new(property: PropertyKey, value: PropertyValue) -> Self {
        Self { property, value }
    }
}

/// Transaction-scoped accumulator of facts for one page.
///
/// The subject may be absent: some index subjects have no resolvable page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticData {
    subject: Option<PageId>,
    statements: Vec<Statement>,
}

impl SemanticData {
    /// Creates an empty accumulator for `subject`.
    #[must_use]
    pub fn new(subject: PageId) -> Self {
        Self {
            subject: Some(subject),
            statements: Vec::new(),
        }
    }

    /// Creates an accumulator whose subject has no page identity.
    #[must_use]
    pub fn without_subject() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subject(&self) -> Option<&PageId> {
        self.subject.as_ref()
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Appends a statement. Existing statements are never removed or reordered.
    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Convenience wrapper around [`Self::add_statement`].
    pub fn add(&mut self, property: PropertyKey, value: PropertyValue) {
        self.add_statement(Statement::new(property, value));
    }

    /// Returns every value recorded for `property`, in insertion order.
    pub fn values_of<'a>(&'a self, property: &'a PropertyKey) -> impl Iterator<Item = &'a PropertyValue> + 'a {
        self.statements
            .iter()
            .filter(move |s| &s.property == property)
            .map(|s| &s.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
