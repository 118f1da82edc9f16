//! Error types reported by external collaborators.

use thiserror::Error;

/// Result type for collaborator calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Failures raised by the discussion store, annotators, the property
/// registry, or the semantic store. The hooks propagate these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The topic repository could not answer a lookup.
    #[error("topic repository error: {0}")]
    Repository(String),

    /// An annotator failed while appending facts for a topic.
    #[error("annotator failed for topic {topic}: {reason}")]
    Annotator { topic: String, reason: String },

    /// The property registry rejected a declaration.
    #[error("property {property} rejected: {reason}")]
    PropertyRejected { property: String, reason: String },

    /// The page named in a rebuild request does not exist.
    #[error("page not found: {0}")]
    PageNotFound(String),

    /// The semantic store failed while rebuilding a page.
    #[error("rebuild of {page} failed: {reason}")]
    Rebuild { page: String, reason: String },

    /// Any other store-level failure.
    #[error("store error: {0}")]
    Store(String),
}
