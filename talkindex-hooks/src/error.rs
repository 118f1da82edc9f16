//! Error types for the coordination hooks.

use talkindex_model::CollaboratorError;
use thiserror::Error;

/// Result type for hook operations.
pub type HookResult<T> = Result<T, HookError>;

/// Errors surfaced by the hooks. Resolution misses are never errors.
#[derive(Debug, Error)]
pub enum HookError {
    /// A collaborator (repository, annotator, registry, store) failed.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Nested forced rebuilds went deeper than the configured bound.
    #[error("forced rebuild of {page} would reach depth {depth} (max {max})")]
    RebuildDepthExceeded {
        page: String,
        depth: usize,
        max: usize,
    },

    /// One or more owned topics could not be rebuilt. Every topic was
    /// attempted before this was raised.
    #[error("cascade from {owner} failed for {} topic page(s)", .failures.len())]
    CascadeFailed {
        owner: String,
        failures: Vec<(String, HookError)>,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Pages that failed to rebuild, for a cascade failure; otherwise empty.
    #[must_use]
    pub fn failed_pages(&self) -> Vec<&str> {
        match self {
            Self::CascadeFailed { failures, .. } => {
                failures.iter().map(|(page, _)| page.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Lets an engine that only understands collaborator errors carry hook
/// failures through its own lifecycle.
impl From<HookError> for CollaboratorError {
    fn from(err: HookError) -> Self {
        match err {
            HookError::Collaborator(inner) => inner,
            HookError::RebuildDepthExceeded { ref page, .. } => CollaboratorError::Rebuild {
                page: page.clone(),
                reason: err.to_string(),
            },
            HookError::CascadeFailed { ref owner, .. } => CollaboratorError::Rebuild {
                page: owner.clone(),
                reason: err.to_string(),
            },
            other => CollaboratorError::Store(other.to_string()),
        }
    }
}
