//! Feed Workflow
//!
//! Mounting tweet cards and feeding them authoritative snapshots. Whoever
//! subscribes to the backend calls [`observe_tweet`] for every snapshot; the
//! card returns the animation frame for its stats bar.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::{Bookmark, ChirpError, Tweet, TweetId};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::views::{StatPresentation, StatsFrame, TweetCard};
use crate::workflows::runtime::require_runtime;
use crate::workflows::state_helpers::{with_bookmarks, with_notifications};
use crate::AppCore;

/// Adopt an authoritative tweet snapshot, mounting a card on first sight.
pub async fn observe_tweet(app_core: &Arc<RwLock<AppCore>>, tweet: Tweet) -> StatsFrame {
    let core = app_core.write().await;
    let actor = core.session().actor_id().cloned();
    let move_offset = core.config().move_offset;

    let mut tweets = core.views().tweets();
    let id = tweet.id.clone();
    let frame = match tweets.get_mut(&id) {
        Some(card) => card.observe_snapshot(tweet),
        None => {
            let card = TweetCard::new(tweet, actor.as_ref(), move_offset);
            let frame = card.stats().frame();
            tweets.apply(id.clone(), card);
            debug!(tweet_id = %id, "tweet card mounted");
            frame
        }
    };
    core.views().set_tweets(tweets);
    trace!(tweet_id = %id, changed = frame.changed(), "tweet snapshot observed");
    frame
}

/// Fetch the current document of `tweet_id` and observe it.
pub async fn refresh_tweet(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
) -> Result<StatsFrame, ChirpError> {
    let runtime = require_runtime(app_core).await?;
    let tweet = runtime
        .fetch_tweet(tweet_id)
        .await?
        .ok_or_else(|| ChirpError::not_found(format!("Tweet {tweet_id} does not exist")))?;
    Ok(observe_tweet(app_core, tweet).await)
}

/// Unmount a card.
pub async fn drop_tweet(app_core: &Arc<RwLock<AppCore>>, tweet_id: &TweetId) -> bool {
    let core = app_core.write().await;
    let mut tweets = core.views().tweets();
    let removed = tweets.remove(tweet_id).is_some();
    core.views().set_tweets(tweets);
    removed
}

/// Current stats bar of a mounted card.
pub async fn tweet_stats(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
) -> Option<[StatPresentation; 3]> {
    let core = app_core.read().await;
    core.views()
        .tweets()
        .get(tweet_id)
        .map(TweetCard::presentation)
}

/// Adopt an authoritative bookmark list.
pub async fn observe_bookmarks(app_core: &Arc<RwLock<AppCore>>, bookmarks: Vec<Bookmark>) {
    let count = bookmarks.len();
    with_bookmarks(app_core, |state| state.replace(bookmarks)).await;
    trace!(count, "bookmarks observed");
}

/// Fetch the signed-in user's bookmarks. Anonymous sessions have none.
pub async fn refresh_bookmarks(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ChirpError> {
    let actor = app_core.read().await.session().actor_id().cloned();
    let Some(actor) = actor else {
        with_bookmarks(app_core, |state| state.clear()).await;
        return Ok(());
    };
    let runtime = require_runtime(app_core).await?;
    let bookmarks = runtime.fetch_bookmarks(&actor).await?;
    observe_bookmarks(app_core, bookmarks).await;
    Ok(())
}

/// Remove a toast once the frontend has shown it.
pub async fn dismiss_toast(app_core: &Arc<RwLock<AppCore>>, id: Uuid) -> bool {
    with_notifications(app_core, |state| state.dismiss(id)).await
}
