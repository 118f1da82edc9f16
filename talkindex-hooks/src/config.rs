//! Hook configuration, optionally read from a `talkindex.toml` file.

use crate::error::{HookError, HookResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use talkindex_types::{NamespaceId, NS_TOPIC};
use tracing::{info, warn};

/// Reserved user name of the discussion service account.
pub const DEFAULT_SERVICE_ACCOUNT: &str = "Discussion Indexer";

/// API request parameter that names the page a discussion write targets.
pub const DEFAULT_PAGE_PARAMETER: &str = "page";

/// Default bound on nested forced rebuilds.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// What the cascade does when rebuilding one owned topic fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    /// Attempt every owned topic, then report all failures together.
    Isolate,
    /// Stop at the first failure.
    Abort,
}

/// Cascade reindex settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CascadeConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Most forced rebuilds allowed to nest on one call stack.
    ///
    /// This also caps legitimate acyclic ownership chains: an edit whose
    /// cascade has to reach a topic more than `max_depth` levels below the
    /// edited page fails with `RebuildDepthExceeded`, even though nothing
    /// is wrong with the data. Raise it for wikis with deep topic nesting.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration for [`DiscussionHooks`](crate::DiscussionHooks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Namespace made semantically linkable at registration.
    pub discussion_namespace: NamespaceId,
    /// User name reserved for the service account.
    pub service_account: String,
    /// Request parameter naming the written page on discussion API calls.
    pub page_parameter: String,
    pub cascade: CascadeConfig,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            discussion_namespace: NS_TOPIC,
            service_account: DEFAULT_SERVICE_ACCOUNT.to_string(),
            page_parameter: DEFAULT_PAGE_PARAMETER.to_string(),
            cascade: CascadeConfig::default(),
        }
    }
}

impl HooksConfig {
    /// Parses a TOML document. Unknown keys are rejected; missing keys take
    /// their defaults.
    pub fn from_toml_str(contents: &str) -> HookResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the file at `path`. IO, parse and validation
    /// failures are all returned.
    pub fn try_load_from(path: impl AsRef<Path>) -> HookResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `path`.
    /// A missing file yields defaults; an unreadable or invalid file yields
    /// defaults with a warning.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No hooks config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded hooks config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load hooks config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> HookResult<()> {
        if self.service_account.trim().is_empty() {
            return Err(HookError::Config("service-account must not be empty".into()));
        }
        if self.page_parameter.trim().is_empty() {
            return Err(HookError::Config("page-parameter must not be empty".into()));
        }
        if self.cascade.max_depth == 0 {
            return Err(HookError::Config("cascade max-depth must be at least 1".into()));
        }
        Ok(())
    }
}

/// Raw TOML structure matching the config file format.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    hooks: HooksSection,
    #[serde(default)]
    cascade: CascadeConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct HooksSection {
    #[serde(default = "default_namespace")]
    discussion_namespace: NamespaceId,
    #[serde(default = "default_service_account")]
    service_account: String,
    #[serde(default = "default_page_parameter")]
    page_parameter: String,
}

fn default_namespace() -> NamespaceId {
    NS_TOPIC
}

fn default_service_account() -> String {
    DEFAULT_SERVICE_ACCOUNT.to_string()
}

fn default_page_parameter() -> String {
    DEFAULT_PAGE_PARAMETER.to_string()
}

impl Default for HooksSection {
    fn default() -> Self {
        Self {
            discussion_namespace: default_namespace(),
            service_account: default_service_account(),
            page_parameter: default_page_parameter(),
        }
    }
}

impl ConfigFile {
    fn into_config(self) -> HooksConfig {
        HooksConfig {
            discussion_namespace: self.hooks.discussion_namespace,
            service_account: self.hooks.service_account,
            page_parameter: self.hooks.page_parameter,
            cascade: self.cascade,
        }
    }
}
