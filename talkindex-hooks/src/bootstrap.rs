//! Startup wiring: namespace enablement and custom property registration.

use crate::error::HookResult;
use talkindex_model::{AnnotatorStore, NamespaceSettings, PropertyInitializer, PropertyRegistry};
use talkindex_types::NamespaceId;
use tracing::info;

/// Marks `namespace` as semantically linkable. Safe to run on every start.
pub fn enable_discussion_namespace(settings: &mut NamespaceSettings, namespace: NamespaceId) {
    settings.set_semantic_links(namespace, true);
    info!(namespace = %namespace, "Enabled semantic links for discussion namespace");
}

/// Hands the engine's property registry and the annotator store to the
/// initializer. A rejected declaration is fatal and is not retried.
pub fn register_properties(
    registry: &mut dyn PropertyRegistry,
    initializer: &dyn PropertyInitializer,
    annotators: &dyn AnnotatorStore,
) -> HookResult<()> {
    initializer.init_properties(registry, annotators)?;
    info!("Registered discussion properties");
    Ok(())
}
