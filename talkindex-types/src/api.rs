use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A completed execution of a discussion API module, as reported by the
/// host's API execution hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCall {
    /// Module name, e.g. `"discussion"`.
    pub module: String,
    /// Whether the module ran in write mode. Trusted from the host.
    pub write_mode: bool,
    /// Request parameters as the host parsed them.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl ApiCall {
    /// Creates a read-only call with no parameters.
    #[must_use]
    pub fn read(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            write_mode: false,
            params: BTreeMap::new(),
        }
    }

    /// Creates a write-mode call with no parameters.
    #[must_use]
    pub fn write(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            write_mode: true,
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns a non-blank parameter value, trimmed.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
