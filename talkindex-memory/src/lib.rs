//! In-memory collaborators for talkindex.
//!
//! Reference implementations of the `talkindex-model` contracts, used by the
//! hook tests and by embedders that want to exercise the hooks without a
//! real wiki behind them:
//! - [`InMemoryIndex`]: a semantic index that runs the full update
//!   lifecycle (before commit → commit → after commit) on edits and rebuilds
//! - [`InMemoryTopicRepository`]: topic records with mutable ownership
//! - [`TopicFactAnnotator`]: appends owner/creator/post-count/activity facts
//! - [`TopicPropertyInitializer`], [`TopicAnnotatorStore`], [`InMemoryPropertyRegistry`]
//!
//! None of these persist anything.

mod annotator;
mod index;
mod properties;
mod topics;

pub use annotator::{
    TopicAnnotatorStore, TopicFactAnnotator, TOPIC_CREATOR, TOPIC_LAST_ACTIVITY, TOPIC_OWNER,
    TOPIC_POST_COUNT,
};
pub use index::InMemoryIndex;
pub use properties::{InMemoryPropertyRegistry, TopicPropertyInitializer};
pub use topics::InMemoryTopicRepository;
