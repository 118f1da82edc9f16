use crate::error::HookResult;
use crate::rebuild::{ForcedRebuilder, RebuildOutcome};
use talkindex_types::ApiCall;
use tracing::debug;

/// Forces a rebuild of the page a discussion API write operated on.
///
/// Discussion writes change the discussion store, which the engine does not
/// see as a page edit, so the rebuild happens on every write regardless of
/// what the engine's change detection thinks. Read-only calls and calls
/// without a target page are no-ops and return `Ok(None)`.
pub fn force_after_api_write(
    call: &ApiCall,
    page_parameter: &str,
    rebuilder: &ForcedRebuilder,
) -> HookResult<Option<RebuildOutcome>> {
    if !call.write_mode {
        return Ok(None);
    }

    let Some(page) = call.param(page_parameter) else {
        debug!(module = %call.module, "Write call has no target page");
        return Ok(None);
    };

    debug!(module = %call.module, page = %page, "Forcing rebuild after discussion write");
    rebuilder.rebuild(page).map(Some)
}
