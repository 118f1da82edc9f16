use talkindex_model::{AnnotatorStore, CollaboratorError, CollaboratorResult, DataAnnotator};
use talkindex_types::{PropertyKey, PropertyValue, SemanticData, Topic};

/// Container page of the topic.
pub const TOPIC_OWNER: &str = "_TOPIC_OWNER";
/// User name of the topic's creator.
pub const TOPIC_CREATOR: &str = "_TOPIC_CREATOR";
/// Number of posts in the topic.
pub const TOPIC_POST_COUNT: &str = "_TOPIC_POST_COUNT";
/// Time of the last activity on the topic.
pub const TOPIC_LAST_ACTIVITY: &str = "_TOPIC_LAST_ACTIVITY";

const ALL_KEYS: [&str; 4] = [TOPIC_OWNER, TOPIC_CREATOR, TOPIC_POST_COUNT, TOPIC_LAST_ACTIVITY];

fn key(k: &str) -> CollaboratorResult<PropertyKey> {
    PropertyKey::new(k).map_err(|e| CollaboratorError::Store(e.to_string()))
}

/// Appends the facts the topic record carries: owner page, creator, post
/// count, and last activity. Absent metadata produces no statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicFactAnnotator;

impl DataAnnotator for TopicFactAnnotator {
    fn annotate(&self, topic: &Topic, data: &mut SemanticData) -> CollaboratorResult<()> {
        if let Some(owner) = &topic.owner {
            data.add(key(TOPIC_OWNER)?, PropertyValue::Page(owner.clone()));
        }
        if let Some(creator) = &topic.creator {
            data.add(key(TOPIC_CREATOR)?, PropertyValue::Text(creator.clone()));
        }
        data.add(
            key(TOPIC_POST_COUNT)?,
            PropertyValue::Number(f64::from(topic.post_count)),
        );
        if let Some(ts) = topic.last_modified {
            data.add(key(TOPIC_LAST_ACTIVITY)?, PropertyValue::Date(ts));
        }
        Ok(())
    }
}

/// Annotator store listing the properties [`TopicFactAnnotator`] fills.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicAnnotatorStore;

impl AnnotatorStore for TopicAnnotatorStore {
    fn has_annotator(&self, key: &PropertyKey) -> bool {
        ALL_KEYS.contains(&key.as_str())
    }

    fn annotator_keys(&self) -> Vec<PropertyKey> {
        ALL_KEYS
            .iter()
            .filter_map(|k| PropertyKey::new(*k).ok())
            .collect()
    }
}
