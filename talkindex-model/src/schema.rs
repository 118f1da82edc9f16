use crate::error::CollaboratorResult;
use serde::{Deserialize, Serialize};
use talkindex_types::PropertyKey;

/// Declares a custom semantic property to the indexing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub key: PropertyKey,
    /// Human-readable label shown by the engine.
    pub label: String,
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDefinition {
    #[must_use]
    pub fn new(key: PropertyKey, label: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key,
            label: label.into(),
            value_type,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The data type of a declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Page,
    Text,
    Number,
    Boolean,
    Date,
    Keyword,
}

/// The indexing engine's property registry.
pub trait PropertyRegistry {
    /// Registers a property. Implementations reject duplicate keys and any
    /// declaration they cannot honour.
    fn declare(&mut self, definition: PropertyDefinition) -> CollaboratorResult<()>;

    /// Returns true if `key` has been declared.
    fn is_declared(&self, key: &PropertyKey) -> bool;
}
