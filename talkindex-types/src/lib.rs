//! Core type definitions for talkindex.
//!
//! This crate defines the plain data that flows between the discussion
//! store, the semantic index, and the coordination hooks:
//! - Page and namespace identifiers
//! - Discussion topics and their owner pages
//! - The transaction-scoped semantic fact accumulator ([`SemanticData`])
//! - Discussion API call descriptors
//!
//! Nothing here talks to a store. Behaviour lives in `talkindex-model`
//! (collaborator contracts) and `talkindex-hooks` (the coordination layer).

mod api;
mod ids;
mod semantic;
mod topic;

pub use api::ApiCall;
pub use ids::{NamespaceId, PageId, NS_MAIN, NS_TALK, NS_TOPIC};
pub use semantic::{PropertyKey, PropertyValue, SemanticData, Statement};
pub use topic::{Topic, TopicId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid page name: {0:?}")]
    InvalidPageName(String),

    #[error("invalid property key: {0:?}")]
    InvalidPropertyKey(String),
}
