//! Shared test helpers for hook tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use talkindex_hooks::{DiscussionHooks, ForcedRebuilder, HookServices, HooksConfig};
use talkindex_memory::{
    InMemoryIndex, InMemoryTopicRepository, TopicAnnotatorStore, TopicFactAnnotator,
    TopicPropertyInitializer,
};
use talkindex_model::{
    CollaboratorError, CollaboratorResult, RebuildRequest, SemanticStore, UpdateObserver,
};
use talkindex_types::{PageId, Topic, NS_TALK, NS_TOPIC};

pub fn talk(name: &str) -> PageId {
    PageId::new(NS_TALK, name).unwrap()
}

pub fn topic_page(name: &str) -> PageId {
    PageId::new(NS_TOPIC, name).unwrap()
}

/// A topic with its own page in the topic namespace, owned by `owner`.
pub fn make_topic(id: &str, page: &str, owner: PageId) -> Topic {
    Topic::new(id, Some(topic_page(page)), Some(owner))
}

/// Semantic store double that records every request and fails rebuilds of
/// one page, if configured.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<RebuildRequest>>,
    fail_on: Option<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(page: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(page.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<RebuildRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pages(&self) -> Vec<String> {
        self.calls().iter().map(|r| r.page().to_string()).collect()
    }
}

impl SemanticStore for RecordingStore {
    fn rebuild(&self, request: &RebuildRequest) -> CollaboratorResult<()> {
        self.calls.lock().unwrap().push(request.clone());
        if self.fail_on.as_deref() == Some(request.page()) {
            return Err(CollaboratorError::Rebuild {
                page: request.page().to_string(),
                reason: "disk full".to_string(),
            });
        }
        Ok(())
    }
}

pub fn make_rebuilder(store: &Arc<RecordingStore>, max_depth: usize) -> ForcedRebuilder {
    let store: Arc<dyn SemanticStore> = store.clone();
    ForcedRebuilder::new(store, max_depth)
}

/// Hooks wired to an in-memory index and topic repository, with the hooks
/// attached as the index's lifecycle observer.
pub struct Harness {
    pub index: Arc<InMemoryIndex>,
    pub topics: Arc<InMemoryTopicRepository>,
    pub hooks: Arc<DiscussionHooks>,
}

impl Harness {
    /// Registers a topic and gives its page (empty) source facts so it can
    /// be rebuilt.
    pub fn add_topic(&self, topic: Topic) {
        if let Some(page) = &topic.page {
            self.index.put_page(page.clone(), Vec::new()).unwrap();
        }
        self.topics.insert(topic).unwrap();
    }
}

pub fn make_harness() -> Harness {
    make_harness_with(HooksConfig::default())
}

pub fn make_harness_with(config: HooksConfig) -> Harness {
    let index = Arc::new(InMemoryIndex::new());
    let topics = Arc::new(InMemoryTopicRepository::new());
    let services = HookServices {
        topics: topics.clone(),
        annotator: Arc::new(TopicFactAnnotator),
        annotator_store: Arc::new(TopicAnnotatorStore),
        property_initializer: Arc::new(TopicPropertyInitializer),
        store: index.clone(),
    };
    let hooks = Arc::new(DiscussionHooks::new(config, services).unwrap());
    let observer: Arc<dyn UpdateObserver> = hooks.clone();
    index.attach_observer(Arc::downgrade(&observer));
    Harness {
        index,
        topics,
        hooks,
    }
}
