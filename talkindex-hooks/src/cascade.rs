//! After-commit cascade: rebuild every topic owned by the committed page.
//!
//! Committing new facts to a container page can leave the topics beneath it
//! with stale derived facts, even though those topic pages were not touched
//! by the transaction. The engine's change detection cannot see that
//! dependency, so each owned topic page is force-rebuilt here.

use crate::config::FailurePolicy;
use crate::error::{HookError, HookResult};
use crate::rebuild::{ForcedRebuilder, RebuildOutcome};
use talkindex_model::TopicRepository;
use talkindex_types::{PageId, SemanticData, TopicId};
use tracing::{debug, info_span, warn};

/// What a cascade did for one committed owner page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// The committed page, if the data had one.
    pub owner: Option<PageId>,
    /// Number of topics the repository reported as owned.
    pub topics_found: usize,
    /// Topic pages rebuilt, in the order they were processed.
    pub rebuilt: Vec<String>,
    /// Owned topics without a resolvable page of their own.
    pub unresolved: Vec<TopicId>,
    /// Topic pages skipped because they were already being rebuilt.
    pub reentrant: Vec<String>,
    /// Topic pages skipped because they are the owner page itself.
    pub self_owned: Vec<String>,
}

/// Resolves the topics owned by the subject of `data` and force-rebuilds
/// each topic page.
///
/// With [`FailurePolicy::Isolate`] every topic is attempted and all failures
/// are reported together as [`HookError::CascadeFailed`]. With
/// [`FailurePolicy::Abort`] the first failure is returned immediately.
pub fn cascade_reindex(
    topics: &dyn TopicRepository,
    rebuilder: &ForcedRebuilder,
    data: &SemanticData,
    policy: FailurePolicy,
) -> HookResult<CascadeReport> {
    let Some(owner) = data.subject() else {
        debug!("Committed data has no page subject, nothing to cascade");
        return Ok(CascadeReport::default());
    };

    let owned = topics.topics_owned_by(owner)?;
    let mut report = CascadeReport {
        owner: Some(owner.clone()),
        topics_found: owned.len(),
        ..CascadeReport::default()
    };
    if owned.is_empty() {
        debug!(owner = %owner, "Page owns no topics");
        return Ok(report);
    }

    let span = info_span!("cascade", owner = %owner, topics = owned.len());
    let _enter = span.enter();

    let mut failures = Vec::new();
    for topic in owned {
        let Some(page) = topic.page else {
            debug!(topic = %topic.id, "Owned topic has no page, skipping");
            report.unresolved.push(topic.id);
            continue;
        };
        if &page == owner {
            debug!(topic = %topic.id, "Topic page is its own owner, skipping");
            report.self_owned.push(page.name().to_string());
            continue;
        }

        match rebuilder.rebuild(page.name()) {
            Ok(RebuildOutcome::Rebuilt) => report.rebuilt.push(page.name().to_string()),
            Ok(RebuildOutcome::SkippedReentrant) => {
                report.reentrant.push(page.name().to_string());
            }
            Err(e) => match policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Isolate => {
                    warn!(topic = %topic.id, page = %page, error = %e, "Topic rebuild failed, continuing cascade");
                    failures.push((page.name().to_string(), e));
                }
            },
        }
    }

    if failures.is_empty() {
        Ok(report)
    } else {
        Err(HookError::CascadeFailed {
            owner: owner.name().to_string(),
            failures,
        })
    }
}
