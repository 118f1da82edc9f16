use serde::{Deserialize, Serialize};

/// Per-call options for a single-page rebuild.
///
/// These travel with the request. The semantic store must not keep them as
/// shared state, so concurrent rebuilds never observe each other's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebuildOptions {
    /// Hand the update to the engine's background job queue instead of
    /// applying it inline.
    pub defer_to_job_queue: bool,
}

impl Default for RebuildOptions {
    fn default() -> Self {
        Self {
            defer_to_job_queue: true,
        }
    }
}

/// "Resynchronize the index entry for this page." Constructed, executed,
/// and discarded within a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebuildRequest {
    page: String,
    options: RebuildOptions,
}

impl RebuildRequest {
    /// A synchronous rebuild that bypasses the job queue.
    #[must_use]
    pub fn forced(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            options: RebuildOptions {
                defer_to_job_queue: false,
            },
        }
    }

    /// A rebuild with the engine's default scheduling.
    #[must_use]
    pub fn scheduled(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            options: RebuildOptions::default(),
        }
    }

    /// The single page this rebuild is restricted to.
    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    #[must_use]
    pub fn options(&self) -> RebuildOptions {
        self.options
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        !self.options.defer_to_job_queue
    }
}
