//! Collaborator contracts for talkindex.
//!
//! The coordination hooks never own a store. Everything they touch is
//! reached through the traits defined here:
//! - [`TopicRepository`]: maps a page to its topic, or to the topics it owns
//! - [`DataAnnotator`]: appends topic-derived facts to in-flight [`SemanticData`]
//! - [`PropertyRegistry`] / [`PropertyInitializer`] / [`AnnotatorStore`]: schema bootstrap
//! - [`SemanticStore`]: synchronous single-page rebuilds
//! - [`UpdateObserver`]: the engine's before/after commit lifecycle
//!
//! These form the contract between the hooks and the host's discussion
//! store and semantic indexing engine.
//!
//! [`SemanticData`]: talkindex_types::SemanticData

mod collaborators;
mod error;
mod rebuild;
mod schema;
mod settings;

pub use collaborators::{
    AnnotatorStore, DataAnnotator, PropertyInitializer, SemanticStore, TopicRepository,
    UpdateObserver,
};
pub use error::{CollaboratorError, CollaboratorResult};
pub use rebuild::{RebuildOptions, RebuildRequest};
pub use schema::{PropertyDefinition, PropertyRegistry, ValueType};
pub use settings::NamespaceSettings;
