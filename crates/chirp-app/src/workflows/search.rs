//! Search Workflow
//!
//! Debounced user search. Each keystroke calls [`on_search_input`]; the call
//! waits out the quiet period and only issues a query if no newer keystroke
//! arrived meanwhile. Responses carry the sequence number of their query and
//! are dropped when a newer query has been issued since.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::{ChirpError, UserQuery};
use tracing::{debug, warn};

use crate::workflows::runtime::require_runtime;
use crate::workflows::state_helpers::with_search;
use crate::AppCore;

/// What became of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A newer keystroke arrived during the quiet period; nothing was issued.
    Superseded,
    /// The query ran but a newer one was issued before it returned.
    Stale,
    /// The results were applied to the search view.
    Applied {
        /// Number of users listed
        count: usize,
    },
}

/// Handle one change of the search input.
pub async fn on_search_input(
    app_core: &Arc<RwLock<AppCore>>,
    input: &str,
) -> Result<SearchOutcome, ChirpError> {
    let runtime = require_runtime(app_core).await?;
    let generation = with_search(app_core, |search| search.begin_input(input)).await;

    let debounce_ms = app_core.read().await.config().search_debounce_ms;
    runtime.sleep_ms(debounce_ms).await?;

    let (seq, query) = {
        let core = app_core.write().await;
        let mut search = core.views().search();
        if !search.is_current_input(generation) {
            debug!(input, generation, "search input superseded");
            return Ok(SearchOutcome::Superseded);
        }
        let seq = search.begin_query();
        core.views().set_search(search);

        let mut query = UserQuery::prefix(input).with_limit(core.config().search_page_size);
        if let Some(username) = core.session().username() {
            query = query.excluding(username);
        }
        (seq, query)
    };

    debug!(seq, prefix = %query.prefix, "issuing user search");
    let result = runtime.search_users(&query).await;
    let count = result.as_ref().map_or(0, Vec::len);
    let failure = result.as_ref().err().cloned();

    let applied = with_search(app_core, |search| search.complete(seq, result)).await;
    if !applied {
        debug!(seq, "stale search response discarded");
        return Ok(SearchOutcome::Stale);
    }
    match failure {
        Some(err) => {
            warn!(seq, error = %err, "user search failed");
            Err(err)
        }
        None => Ok(SearchOutcome::Applied { count }),
    }
}
