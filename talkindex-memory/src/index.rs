//! In-memory semantic index with a real update lifecycle.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock, Weak};
use talkindex_model::{
    CollaboratorError, CollaboratorResult, RebuildRequest, SemanticStore, UpdateObserver,
};
use talkindex_types::{PageId, SemanticData, Statement};
use tracing::debug;

/// Source facts of a page as last edited.
#[derive(Debug, Clone)]
struct PageSource {
    page: PageId,
    statements: Vec<Statement>,
}

/// A semantic index held in memory.
///
/// Every update (an edit via [`Self::update_page`] or an inline rebuild)
/// builds fresh [`SemanticData`] from the page's source facts, hands it to the
/// attached [`UpdateObserver`] before commit, stores it, then notifies the
/// observer after commit. Deferred rebuild requests are queued instead.
///
/// No lock is held while the observer runs, so observers may rebuild other
/// pages from inside the lifecycle.
#[derive(Default)]
pub struct InMemoryIndex {
    sources: RwLock<HashMap<String, PageSource>>,
    entries: RwLock<HashMap<String, SemanticData>>,
    rebuilds: Mutex<Vec<RebuildRequest>>,
    queued: Mutex<Vec<RebuildRequest>>,
    observer: RwLock<Option<Weak<dyn UpdateObserver>>>,
}

impl InMemoryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the lifecycle observer. Held weakly so an observer that owns
    /// this index does not keep itself alive.
    pub fn attach_observer(&self, observer: Weak<dyn UpdateObserver>) {
        if let Ok(mut slot) = self.observer.write() {
            *slot = Some(observer);
        }
    }

    /// Records a page's source facts without indexing it.
    pub fn put_page(&self, page: PageId, statements: Vec<Statement>) -> CollaboratorResult<()> {
        let mut sources = self.sources.write().map_err(|_| poisoned())?;
        sources.insert(page.name().to_string(), PageSource { page, statements });
        Ok(())
    }

    /// An edit: replaces the page's source facts and runs the update lifecycle.
    pub fn update_page(&self, page: PageId, statements: Vec<Statement>) -> CollaboratorResult<()> {
        let name = page.name().to_string();
        self.put_page(page, statements)?;
        self.run_update(&name, None)
    }

    /// The committed index entry for `page`.
    #[must_use]
    pub fn entry(&self, page: &str) -> Option<SemanticData> {
        self.entries.read().ok()?.get(page).cloned()
    }

    /// Inline rebuilds that committed an entry, in commit order. Requests
    /// that failed before commit (unknown page, rejected data) are absent.
    #[must_use]
    pub fn rebuild_log(&self) -> Vec<RebuildRequest> {
        self.rebuilds.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Page names of the committed inline rebuilds.
    #[must_use]
    pub fn rebuilt_pages(&self) -> Vec<String> {
        self.rebuild_log()
            .iter()
            .map(|req| req.page().to_string())
            .collect()
    }

    /// Deferred rebuild requests waiting for the job queue.
    #[must_use]
    pub fn queued_jobs(&self) -> Vec<RebuildRequest> {
        self.queued.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub fn clear_logs(&self) {
        if let Ok(mut log) = self.rebuilds.lock() {
            log.clear();
        }
        if let Ok(mut q) = self.queued.lock() {
            q.clear();
        }
    }

    fn observer(&self) -> Option<std::sync::Arc<dyn UpdateObserver>> {
        self.observer.read().ok()?.as_ref()?.upgrade()
    }

    /// Runs the update lifecycle for `name`. A `rebuild` request is logged
    /// once its entry is committed, before the after-commit observer runs.
    fn run_update(&self, name: &str, rebuild: Option<&RebuildRequest>) -> CollaboratorResult<()> {
        let source = {
            let sources = self.sources.read().map_err(|_| poisoned())?;
            sources
                .get(name)
                .cloned()
                .ok_or_else(|| CollaboratorError::PageNotFound(name.to_string()))?
        };

        let mut data = SemanticData::new(source.page);
        for statement in source.statements {
            data.add_statement(statement);
        }

        let observer = self.observer();
        if let Some(observer) = &observer {
            observer.before_commit(&mut data)?;
        }

        {
            let mut entries = self.entries.write().map_err(|_| poisoned())?;
            entries.insert(name.to_string(), data.clone());
        }
        debug!(page = %name, statements = data.len(), "Committed index entry");
        if let Some(request) = rebuild {
            let mut log = self.rebuilds.lock().map_err(|_| poisoned())?;
            log.push(request.clone());
        }

        if let Some(observer) = &observer {
            observer.after_commit(&data)?;
        }
        Ok(())
    }
}

impl SemanticStore for InMemoryIndex {
    fn rebuild(&self, request: &RebuildRequest) -> CollaboratorResult<()> {
        if !request.is_inline() {
            let mut queued = self.queued.lock().map_err(|_| poisoned())?;
            queued.push(request.clone());
            return Ok(());
        }

        self.run_update(request.page(), Some(request))
    }
}

fn poisoned() -> CollaboratorError {
    CollaboratorError::Store("index lock poisoned".to_string())
}
