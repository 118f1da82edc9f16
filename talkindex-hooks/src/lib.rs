//! Update propagation and cascading reindex hooks.
//!
//! Sits between a threaded-discussion store and a semantic indexing engine
//! and keeps the index consistent with discussion facts the engine cannot
//! observe on its own (topic ownership, topic-to-page relationships).
//!
//! # Components
//!
//! - **Reserved identity**: reserves the service account's user name
//! - **Bootstrap**: enables the discussion namespace and registers custom properties
//! - **Annotation**: before commit, appends topic facts to a topic page's data
//! - **Cascade**: after commit, force-rebuilds every topic the committed page owns
//! - **Write path**: after a discussion API write, force-rebuilds the written page
//!
//! Cascade and write path share one primitive, [`ForcedRebuilder`], which
//! rebuilds a single page inline, bypassing the engine's job queue.
//!
//! # Lifecycle
//!
//! ```text
//! edit ─▶ before commit ─▶ annotate ─▶ commit ─▶ after commit ─▶ cascade
//!                                                                  │
//!                         forced rebuild of each owned topic ◀─────┘
//!                         (re-enters the lifecycle for that topic)
//! ```
//!
//! Everything runs synchronously in the request that raised the event.
//! Failures propagate to the host; a failed rebuild fails the write.

mod annotate;
mod bootstrap;
mod cascade;
mod config;
mod dispatch;
mod error;
pub mod logging;
mod rebuild;
mod reserved;
mod write_path;

pub use annotate::{inject_annotations, AnnotationOutcome};
pub use bootstrap::{enable_discussion_namespace, register_properties};
pub use cascade::{cascade_reindex, CascadeReport};
pub use config::{
    CascadeConfig, FailurePolicy, HooksConfig, DEFAULT_MAX_DEPTH, DEFAULT_PAGE_PARAMETER,
    DEFAULT_SERVICE_ACCOUNT,
};
pub use dispatch::{DiscussionHooks, HookServices, HostEvent};
pub use error::{HookError, HookResult};
pub use rebuild::{ForcedRebuilder, RebuildOutcome};
pub use reserved::register_reserved_username;
pub use write_path::force_after_api_write;
