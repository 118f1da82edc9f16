//! Forced rebuild primitive.
//!
//! Rebuilds one page's index entry synchronously, bypassing the engine's
//! job queue. The bypass travels with each [`RebuildRequest`], so there is
//! no shared "disable jobs" flag on the store for concurrent rebuilds to
//! race on.
//!
//! A rebuild re-enters the engine's update lifecycle, which runs the hooks
//! again. Pages currently being force-rebuilt on the calling thread are
//! tracked; asking for one of them again is skipped, and nesting is capped
//! at a configured depth.

use crate::error::{HookError, HookResult};
use std::cell::RefCell;
use std::sync::Arc;
use talkindex_model::{RebuildRequest, SemanticStore};
use tracing::{info, info_span, warn};

thread_local! {
    static IN_FLIGHT: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Outcome of a forced rebuild call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The page's index entry was rebuilt inline.
    Rebuilt,
    /// The page was already being rebuilt further up the call stack.
    SkippedReentrant,
}

/// Synchronous, job-queue-bypassing single-page rebuilder.
#[derive(Clone)]
pub struct ForcedRebuilder {
    store: Arc<dyn SemanticStore>,
    max_depth: usize,
}

impl ForcedRebuilder {
    pub fn new(store: Arc<dyn SemanticStore>, max_depth: usize) -> Self {
        Self { store, max_depth }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Rebuilds `page` now. On `Ok(Rebuilt)` the index entry reflects the
    /// page's current facts. Store failures propagate.
    pub fn rebuild(&self, page: &str) -> HookResult<RebuildOutcome> {
        let Some(_guard) = InFlightGuard::enter(page, self.max_depth)? else {
            warn!(page = %page, "Page already being rebuilt on this call stack, skipping");
            return Ok(RebuildOutcome::SkippedReentrant);
        };

        let span = info_span!("forced_rebuild", page = %page);
        let _enter = span.enter();

        let request = RebuildRequest::forced(page);
        self.store.rebuild(&request)?;
        info!("Forced rebuild complete");
        Ok(RebuildOutcome::Rebuilt)
    }

    /// Pages being force-rebuilt on the current thread, outermost first.
    #[must_use]
    pub fn in_flight() -> Vec<String> {
        IN_FLIGHT.with(|stack| stack.borrow().clone())
    }
}

/// Marks a page as in flight for as long as the guard lives.
struct InFlightGuard;

impl InFlightGuard {
    fn enter(page: &str, max_depth: usize) -> HookResult<Option<Self>> {
        IN_FLIGHT.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.iter().any(|p| p == page) {
                return Ok(None);
            }
            if stack.len() >= max_depth {
                return Err(HookError::RebuildDepthExceeded {
                    page: page.to_string(),
                    depth: stack.len() + 1,
                    max: max_depth,
                });
            }
            stack.push(page.to_string());
            Ok(Some(Self))
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // Guards nest strictly, so the top entry is ours.
        let _ = IN_FLIGHT.try_with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
