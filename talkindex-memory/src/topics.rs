use std::collections::BTreeMap;
use std::sync::RwLock;
use talkindex_model::{CollaboratorError, CollaboratorResult, TopicRepository};
use talkindex_types::{PageId, Topic, TopicId};

/// Topic records held in memory, keyed by topic id.
#[derive(Debug, Default)]
pub struct InMemoryTopicRepository {
    topics: RwLock<BTreeMap<TopicId, Topic>>,
}

impl InMemoryTopicRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a topic.
    pub fn insert(&self, topic: Topic) -> CollaboratorResult<()> {
        let mut topics = self.topics.write().map_err(|_| poisoned())?;
        topics.insert(topic.id.clone(), topic);
        Ok(())
    }

    /// Moves a topic under a new owner (or detaches it with `None`).
    pub fn set_owner(&self, id: &TopicId, owner: Option<PageId>) -> CollaboratorResult<()> {
        let mut topics = self.topics.write().map_err(|_| poisoned())?;
        let topic = topics
            .get_mut(id)
            .ok_or_else(|| CollaboratorError::Repository(format!("unknown topic {id}")))?;
        topic.owner = owner;
        Ok(())
    }

    pub fn remove(&self, id: &TopicId) -> CollaboratorResult<Option<Topic>> {
        let mut topics = self.topics.write().map_err(|_| poisoned())?;
        Ok(topics.remove(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.read().map(|t| t.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TopicRepository for InMemoryTopicRepository {
    fn find_topic(&self, page: &PageId) -> CollaboratorResult<Option<Topic>> {
        let topics = self.topics.read().map_err(|_| poisoned())?;
        Ok(topics
            .values()
            .find(|t| t.page.as_ref() == Some(page))
            .cloned())
    }

    fn topics_owned_by(&self, owner: &PageId) -> CollaboratorResult<Vec<Topic>> {
        let topics = self.topics.read().map_err(|_| poisoned())?;
        Ok(topics
            .values()
            .filter(|t| t.is_owned_by(owner))
            .cloned()
            .collect())
    }
}

fn poisoned() -> CollaboratorError {
    CollaboratorError::Repository("topic lock poisoned".to_string())
}
