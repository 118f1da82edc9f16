use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use talkindex_types::NamespaceId;

/// The indexing engine's process-wide namespace configuration: which
/// namespaces may carry semantic links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSettings {
    #[serde(default)]
    semantic_links: BTreeMap<NamespaceId, bool>,
}

impl NamespaceSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the semantic-link flag for `namespace`.
    pub fn set_semantic_links(&mut self, namespace: NamespaceId, enabled: bool) {
        self.semantic_links.insert(namespace, enabled);
    }

    /// Unset namespaces are not linkable.
    #[must_use]
    pub fn has_semantic_links(&self, namespace: NamespaceId) -> bool {
        self.semantic_links.get(&namespace).copied().unwrap_or(false)
    }

    /// Namespaces currently enabled, in ascending order.
    pub fn enabled_namespaces(&self) -> impl Iterator<Item = NamespaceId> + '_ {
        self.semantic_links
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(ns, _)| *ns)
    }
}
