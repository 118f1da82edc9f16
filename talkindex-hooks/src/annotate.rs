//! Before-commit injection of discussion-derived facts.

use crate::error::HookResult;
use talkindex_model::{DataAnnotator, TopicRepository};
use talkindex_types::SemanticData;
use tracing::debug;

/// Outcome of a before-commit annotation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationOutcome {
    /// The data has no page subject.
    NoSubject,
    /// The subject page is not a discussion topic.
    NotATopic,
    /// The annotator appended this many statements.
    Annotated { added: usize },
}

/// Resolves the subject of `data` to a topic and, if there is one, lets the
/// annotator append topic facts to `data` in place.
///
/// Only the in-memory `data` is mutated. No rebuilds happen here.
pub fn inject_annotations(
    topics: &dyn TopicRepository,
    annotator: &dyn DataAnnotator,
    data: &mut SemanticData,
) -> HookResult<AnnotationOutcome> {
    let Some(subject) = data.subject().cloned() else {
        debug!("Semantic data has no page subject, skipping annotation");
        return Ok(AnnotationOutcome::NoSubject);
    };

    let Some(topic) = topics.find_topic(&subject)? else {
        debug!(page = %subject, "Page is not a discussion topic");
        return Ok(AnnotationOutcome::NotATopic);
    };

    let before = data.len();
    annotator.annotate(&topic, data)?;
    let added = data.len().saturating_sub(before);

    debug!(page = %subject, topic = %topic.id, added, "Annotated topic page");
    Ok(AnnotationOutcome::Annotated { added })
}
