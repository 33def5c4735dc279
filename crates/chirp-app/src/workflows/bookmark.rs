//! Bookmark Workflow
//!
//! Toggling a bookmark from a tweet's contextual menu. The menu is closed
//! before the mutation is issued, and the outcome is reported with a toast.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::{ChirpError, Mutation, TweetId};
use tracing::{debug, info, warn};

use crate::gate::Gate;
use crate::views::Toast;
use crate::workflows::auth::gate_actor;
use crate::workflows::feed::refresh_bookmarks;
use crate::workflows::interaction::{execute, InteractionOutcome};
use crate::workflows::runtime::require_runtime;
use crate::workflows::state_helpers::{push_error_toast, push_toast, with_bookmarks};
use crate::AppCore;

/// Toggle `tweet_id` in the signed-in user's bookmarks.
///
/// `close_menu` runs after the gate and the direction decision, but before
/// the remote call. It does not run when sign-in is required.
pub async fn toggle_bookmark(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
    close_menu: impl FnOnce(),
) -> Result<InteractionOutcome, ChirpError> {
    let Gate::Open(actor) = gate_actor(app_core).await else {
        return Ok(InteractionOutcome::SignInRequired);
    };
    let runtime = require_runtime(app_core).await?;

    let (ticket, direction) = with_bookmarks(app_core, |bookmarks| {
        let direction = chirp_core::direction_from_membership(bookmarks.is_bookmarked(tweet_id));
        bookmarks
            .begin(tweet_id, direction)
            .map(|ticket| (ticket, direction))
    })
    .await?;
    let mutation = Mutation::bookmark(direction, actor, tweet_id.clone());

    close_menu();
    debug!(%mutation, %ticket, "issuing bookmark toggle");

    match execute(runtime.as_ref(), &mutation).await {
        Ok(()) => {
            let now_ms = match runtime.current_time_ms().await {
                Ok(now_ms) => Some(now_ms),
                Err(err) => {
                    warn!(error = %err, "clock unavailable, bookmark time left to the next fetch");
                    None
                }
            };
            let confirmed = with_bookmarks(app_core, |bookmarks| {
                bookmarks.confirm(tweet_id, ticket, now_ms.unwrap_or_default())
            })
            .await;
            if confirmed.is_none() {
                // Signed out (or switched user) while the call was in flight.
                debug!(%mutation, "bookmark toggle confirmed after its toggle was cleared");
                return Ok(InteractionOutcome::Applied(mutation));
            }
            if now_ms.is_none() {
                if let Err(err) = refresh_bookmarks(app_core).await {
                    warn!(error = %err, "bookmark refresh after clock failure failed");
                }
            }
            let href = app_core.read().await.config().bookmarks_href.clone();
            push_toast(app_core, Toast::bookmark_result(direction, &href)).await;
            info!(%mutation, "bookmark toggle confirmed");
            Ok(InteractionOutcome::Applied(mutation))
        }
        Err(err) => {
            let reverted = with_bookmarks(app_core, |bookmarks| {
                bookmarks.fail(tweet_id, ticket, err.to_string())
            })
            .await;
            if reverted.is_some() {
                warn!(%mutation, error = %err, "bookmark toggle failed, reverted");
                push_error_toast(app_core, &format!("{} this Tweet", mutation.name()), &err).await;
            } else {
                debug!(%mutation, error = %err, "bookmark toggle failed after its toggle was cleared");
            }
            Err(err)
        }
    }
}
