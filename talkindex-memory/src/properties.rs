use crate::annotator::{TOPIC_CREATOR, TOPIC_LAST_ACTIVITY, TOPIC_OWNER, TOPIC_POST_COUNT};
use std::collections::BTreeMap;
use talkindex_model::{
    AnnotatorStore, CollaboratorError, CollaboratorResult, PropertyDefinition,
    PropertyInitializer, PropertyRegistry, ValueType,
};
use talkindex_types::PropertyKey;
use tracing::debug;

/// Property registry that keeps declarations in memory and rejects
/// duplicate keys.
#[derive(Debug, Default)]
pub struct InMemoryPropertyRegistry {
    declared: BTreeMap<PropertyKey, PropertyDefinition>,
    order: Vec<PropertyKey>,
}

impl InMemoryPropertyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyDefinition> {
        self.declared.get(key)
    }

    /// Declared keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[PropertyKey] {
        &self.order
    }
}

impl PropertyRegistry for InMemoryPropertyRegistry {
    fn declare(&mut self, definition: PropertyDefinition) -> CollaboratorResult<()> {
        if self.declared.contains_key(&definition.key) {
            return Err(CollaboratorError::PropertyRejected {
                property: definition.key.to_string(),
                reason: "already declared".to_string(),
            });
        }
        debug!(property = %definition.key, "Declared property");
        self.order.push(definition.key.clone());
        self.declared.insert(definition.key.clone(), definition);
        Ok(())
    }

    fn is_declared(&self, key: &PropertyKey) -> bool {
        self.declared.contains_key(key)
    }
}

/// Declares the topic properties, refusing any the annotator store cannot
/// fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicPropertyInitializer;

impl PropertyInitializer for TopicPropertyInitializer {
    fn definitions(&self) -> Vec<PropertyDefinition> {
        let defs = [
            (TOPIC_OWNER, "Topic owner", ValueType::Page, "Container page of the topic"),
            (TOPIC_CREATOR, "Topic creator", ValueType::Text, "User who started the topic"),
            (TOPIC_POST_COUNT, "Post count", ValueType::Number, "Number of posts in the topic"),
            (TOPIC_LAST_ACTIVITY, "Last activity", ValueType::Date, "Time of the latest post"),
        ];
        defs.into_iter()
            .filter_map(|(key, label, value_type, description)| {
                let key = PropertyKey::new(key).ok()?;
                Some(PropertyDefinition::new(key, label, value_type).with_description(description))
            })
            .collect()
    }

    fn init_properties(
        &self,
        registry: &mut dyn PropertyRegistry,
        annotators: &dyn AnnotatorStore,
    ) -> CollaboratorResult<()> {
        for definition in self.definitions() {
            if !annotators.has_annotator(&definition.key) {
                return Err(CollaboratorError::PropertyRejected {
                    property: definition.key.to_string(),
                    reason: "no annotator provides this property".to_string(),
                });
            }
            registry.declare(definition)?;
        }
        Ok(())
    }
}
