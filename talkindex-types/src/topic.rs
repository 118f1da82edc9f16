use crate::ids::PageId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a discussion topic in the discussion store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discussion unit as reported by the topic repository.
///
/// A topic has its own page (the "topic title") and at most one owner: the
/// container page it was created under. Ownership is always looked up from
/// the repository and never cached by the hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// The topic's own page. `None` when the repository cannot resolve it.
    pub page: Option<PageId>,
    /// The container page this topic lives under.
    pub owner: Option<PageId>,
    /// User name of the topic's creator, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Number of posts in the topic.
    #[serde(default)]
    pub post_count: u32,
    /// Unix seconds of the last activity on the topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
}

impl Topic {
    /// Creates a topic with the given id, page, and owner and no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, page: Option<PageId>, owner: Option<PageId>) -> Self {
        Self {
            id: TopicId::new(id),
            page,
            owner,
            creator: None,
            post_count: 0,
            last_modified: None,
        }
    }

    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    #[must_use]
    pub fn with_post_count(mut self, post_count: u32) -> Self {
        self.post_count = post_count;
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, timestamp: i64) -> Self {
        self.last_modified = Some(timestamp);
        self
    }

    /// Returns true if `page` is this topic's owner.
    #[must_use]
    pub fn is_owned_by(&self, page: &PageId) -> bool {
        self.owner.as_ref() == Some(page)
    }
}
