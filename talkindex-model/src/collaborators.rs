use crate::error::CollaboratorResult;
use crate::rebuild::RebuildRequest;
use crate::schema::{PropertyDefinition, PropertyRegistry};
use talkindex_types::{PageId, PropertyKey, SemanticData, Topic};

/// Read access to the discussion store's topic records.
///
/// Lookups that find nothing return `Ok(None)` / `Ok(vec![])`; only genuine
/// store failures are errors.
pub trait TopicRepository: Send + Sync {
    /// The topic whose own page is `page`, if any.
    fn find_topic(&self, page: &PageId) -> CollaboratorResult<Option<Topic>>;

    /// All topics whose owner (container page) is `owner`.
    fn topics_owned_by(&self, owner: &PageId) -> CollaboratorResult<Vec<Topic>>;
}

/// Decides which discussion-derived statements belong to a topic and
/// appends them to the in-flight semantic data.
pub trait DataAnnotator: Send + Sync {
    /// Appends statements for `topic` to `data` in place. Must not remove
    /// existing statements.
    fn annotate(&self, topic: &Topic, data: &mut SemanticData) -> CollaboratorResult<()>;
}

/// Store of the property annotators the extension provides, keyed by the
/// property each one fills.
pub trait AnnotatorStore: Send + Sync {
    /// Returns true if an annotator exists for `key`.
    fn has_annotator(&self, key: &PropertyKey) -> bool;

    /// Keys of every available annotator.
    fn annotator_keys(&self) -> Vec<PropertyKey>;
}

/// Declares every custom property the extension defines.
pub trait PropertyInitializer: Send + Sync {
    /// The full set of definitions this initializer declares.
    fn definitions(&self) -> Vec<PropertyDefinition>;

    /// Declares all properties into `registry`. The default declares each
    /// entry of [`Self::definitions`] in order and stops at the first
    /// rejection.
    fn init_properties(
        &self,
        registry: &mut dyn PropertyRegistry,
        _annotators: &dyn AnnotatorStore,
    ) -> CollaboratorResult<()> {
        for definition in self.definitions() {
            registry.declare(definition)?;
        }
        Ok(())
    }
}

/// The semantic index's rebuild entry point.
pub trait SemanticStore: Send + Sync {
    /// Rebuilds exactly the page named in `request`. When the request is
    /// inline the rebuild completes before this returns, and the page's index
    /// entry reflects its current facts.
    fn rebuild(&self, request: &RebuildRequest) -> CollaboratorResult<()>;
}

/// The indexing engine's per-page update lifecycle.
///
/// `before_commit` runs with the mutable in-flight data; `after_commit`
/// runs once the data has been persisted. Both run in the same transaction
/// boundary, in that order.
pub trait UpdateObserver: Send + Sync {
    fn before_commit(&self, data: &mut SemanticData) -> CollaboratorResult<()>;

    fn after_commit(&self, data: &SemanticData) -> CollaboratorResult<()>;
}
