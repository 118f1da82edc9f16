//! Routes host lifecycle events to the hook handlers.
//!
//! The handlers themselves are free functions taking explicit
//! dependencies; [`DiscussionHooks`] bundles those dependencies and the
//! configuration so a host can register a single object.

use crate::annotate::{inject_annotations, AnnotationOutcome};
use crate::bootstrap::{enable_discussion_namespace, register_properties};
use crate::cascade::{cascade_reindex, CascadeReport};
use crate::config::HooksConfig;
use crate::error::HookResult;
use crate::rebuild::{ForcedRebuilder, RebuildOutcome};
use crate::reserved::register_reserved_username;
use crate::write_path::force_after_api_write;
use std::sync::Arc;
use talkindex_model::{
    AnnotatorStore, CollaboratorResult, DataAnnotator, NamespaceSettings, PropertyInitializer,
    PropertyRegistry, SemanticStore, TopicRepository, UpdateObserver,
};
use talkindex_types::{ApiCall, SemanticData};

/// A lifecycle event raised by the host.
pub enum HostEvent<'a> {
    /// Extension registration at process startup.
    ExtensionRegistered { settings: &'a mut NamespaceSettings },
    /// The engine is bootstrapping its property schema.
    InitProperties { registry: &'a mut dyn PropertyRegistry },
    /// The engine is about to persist semantic data for a page.
    BeforeUpdateCommit { data: &'a mut SemanticData },
    /// The engine just persisted semantic data for a page.
    AfterUpdateCommit { data: &'a SemanticData },
    /// A discussion API module finished executing.
    ApiExecuted { call: &'a ApiCall },
    /// The host is collecting reserved user names.
    CollectReservedUsernames { names: &'a mut Vec<String> },
}

impl HostEvent<'_> {
    /// Stable event name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtensionRegistered { .. } => "extension_registered",
            Self::InitProperties { .. } => "init_properties",
            Self::BeforeUpdateCommit { .. } => "before_update_commit",
            Self::AfterUpdateCommit { .. } => "after_update_commit",
            Self::ApiExecuted { .. } => "api_executed",
            Self::CollectReservedUsernames { .. } => "collect_reserved_usernames",
        }
    }
}

/// The external services the hooks call into.
#[derive(Clone)]
pub struct HookServices {
    pub topics: Arc<dyn TopicRepository>,
    pub annotator: Arc<dyn DataAnnotator>,
    pub annotator_store: Arc<dyn AnnotatorStore>,
    pub property_initializer: Arc<dyn PropertyInitializer>,
    pub store: Arc<dyn SemanticStore>,
}

/// Discussion/semantic-index coordination hooks.
pub struct DiscussionHooks {
    config: HooksConfig,
    services: HookServices,
    rebuilder: ForcedRebuilder,
}

impl DiscussionHooks {
    /// Creates the hooks after validating `config`.
    pub fn new(config: HooksConfig, services: HookServices) -> HookResult<Self> {
        config.validate()?;
        let rebuilder = ForcedRebuilder::new(Arc::clone(&services.store), config.cascade.max_depth);
        Ok(Self {
            config,
            services,
            rebuilder,
        })
    }

    #[must_use]
    pub fn config(&self) -> &HooksConfig {
        &self.config
    }

    /// The rebuild primitive shared by the cascade and the write path.
    #[must_use]
    pub fn rebuilder(&self) -> &ForcedRebuilder {
        &self.rebuilder
    }

    /// Dispatches one host event to its handler.
    pub fn handle(&self, event: HostEvent<'_>) -> HookResult<()> {
        tracing::trace!(event = event.name(), "Dispatching host event");
        match event {
            HostEvent::ExtensionRegistered { settings } => {
                self.on_extension_registered(settings);
                Ok(())
            }
            HostEvent::InitProperties { registry } => self.on_init_properties(registry),
            HostEvent::BeforeUpdateCommit { data } => self.on_before_update_commit(data).map(|_| ()),
            HostEvent::AfterUpdateCommit { data } => self.on_after_update_commit(data).map(|_| ()),
            HostEvent::ApiExecuted { call } => self.on_api_executed(call).map(|_| ()),
            HostEvent::CollectReservedUsernames { names } => {
                self.on_collect_reserved_usernames(names);
                Ok(())
            }
        }
    }

    pub fn on_extension_registered(&self, settings: &mut NamespaceSettings) {
        enable_discussion_namespace(settings, self.config.discussion_namespace);
    }

    pub fn on_init_properties(&self, registry: &mut dyn PropertyRegistry) -> HookResult<()> {
        register_properties(
            registry,
            self.services.property_initializer.as_ref(),
            self.services.annotator_store.as_ref(),
        )
    }

    pub fn on_before_update_commit(&self, data: &mut SemanticData) -> HookResult<AnnotationOutcome> {
        inject_annotations(
            self.services.topics.as_ref(),
            self.services.annotator.as_ref(),
            data,
        )
    }

    pub fn on_after_update_commit(&self, data: &SemanticData) -> HookResult<CascadeReport> {
        cascade_reindex(
            self.services.topics.as_ref(),
            &self.rebuilder,
            data,
            self.config.cascade.failure_policy,
        )
    }

    pub fn on_api_executed(&self, call: &ApiCall) -> HookResult<Option<RebuildOutcome>> {
        force_after_api_write(call, &self.config.page_parameter, &self.rebuilder)
    }

    pub fn on_collect_reserved_usernames(&self, names: &mut Vec<String>) {
        register_reserved_username(names, &self.config.service_account);
    }
}

impl UpdateObserver for DiscussionHooks {
    fn before_commit(&self, data: &mut SemanticData) -> CollaboratorResult<()> {
        self.on_before_update_commit(data)?;
        Ok(())
    }

    fn after_commit(&self, data: &SemanticData) -> CollaboratorResult<()> {
        self.on_after_update_commit(data)?;
        Ok(())
    }
}
