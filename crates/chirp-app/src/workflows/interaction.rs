//! Interaction Workflow
//!
//! Like, retweet and reply actions on a mounted tweet card. Direction is
//! always decided from the authoritative membership set of the card's last
//! observed document; the optimistic display only affects what is drawn.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::{decide_direction, ChirpError, InteractionKind, Mutation, TweetId, TweetRef};
use tracing::{debug, info, warn};

use crate::gate::Gate;
use crate::runtime_bridge::RuntimeBridge;
use crate::workflows::auth::gate_actor;
use crate::workflows::runtime::require_runtime;
use crate::workflows::state_helpers::{push_error_toast, with_tweets};
use crate::AppCore;

/// Result of a gated toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Nobody is signed in; the sign-in prompt was opened instead.
    SignInRequired,
    /// The mutation was issued and accepted.
    Applied(Mutation),
}

/// Result of pressing reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Nobody is signed in; the sign-in prompt was opened instead.
    SignInRequired,
    /// The tweet is rendered inside a reply thread; the button is inert.
    Disabled,
    /// The frontend should open the reply composer for `tweet`.
    ComposerRequested {
        /// Tweet being replied to
        tweet: TweetRef,
    },
}

/// Issue exactly one remote call for `mutation`.
pub async fn execute(runtime: &dyn RuntimeBridge, mutation: &Mutation) -> Result<(), ChirpError> {
    match mutation {
        Mutation::Like { actor, tweet } => runtime.like(actor, tweet).await,
        Mutation::Unlike { actor, tweet } => runtime.unlike(actor, tweet).await,
        Mutation::Retweet { actor, tweet } => runtime.retweet(actor, tweet).await,
        Mutation::Unretweet { actor, tweet } => runtime.unretweet(actor, tweet).await,
        Mutation::Bookmark { actor, tweet } => runtime.bookmark(actor, tweet).await,
        Mutation::Unbookmark { actor, tweet } => runtime.unbookmark(actor, tweet).await,
    }
}

/// Toggle the signed-in user's like on `tweet_id`.
pub async fn toggle_like(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
) -> Result<InteractionOutcome, ChirpError> {
    toggle_membership(app_core, tweet_id, InteractionKind::Like).await
}

/// Toggle the signed-in user's retweet of `tweet_id`.
pub async fn toggle_retweet(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
) -> Result<InteractionOutcome, ChirpError> {
    toggle_membership(app_core, tweet_id, InteractionKind::Retweet).await
}

async fn toggle_membership(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
    kind: InteractionKind,
) -> Result<InteractionOutcome, ChirpError> {
    let Gate::Open(actor) = gate_actor(app_core).await else {
        return Ok(InteractionOutcome::SignInRequired);
    };
    let runtime = require_runtime(app_core).await?;

    let (ticket, mutation) = with_tweets(app_core, |tweets| {
        tweets.try_update(
            tweet_id,
            |card| {
                let direction = decide_direction(card.members(kind)?, &actor);
                let (ticket, _) = card.begin(kind, direction)?;
                Ok((ticket, Mutation::new(kind, direction, actor.clone(), &card.reference())))
            },
            || ChirpError::not_found(format!("Tweet {tweet_id} is not mounted")),
        )
    })
    .await?;

    debug!(%mutation, %ticket, "issuing interaction");
    let result = execute(runtime.as_ref(), &mutation).await;

    // The card may have been reset (session switch) or dropped while the call
    // was in flight; only the toggle holding `ticket` is settled.
    let settled = with_tweets(app_core, |tweets| {
        let Some(card) = tweets.get_mut(tweet_id) else {
            return false;
        };
        let outcome = match &result {
            Ok(()) => card.confirm(kind, ticket),
            Err(err) => card.fail(kind, ticket, err.to_string()),
        };
        match outcome {
            Ok(frame) => frame.is_some(),
            Err(rejected) => {
                warn!(error = %rejected, "settling tweet card rejected");
                false
            }
        }
    })
    .await;

    match result {
        Ok(()) => {
            if settled {
                info!(%mutation, "interaction confirmed");
            } else {
                debug!(%mutation, "interaction confirmed after its toggle was reset");
            }
            Ok(InteractionOutcome::Applied(mutation))
        }
        Err(err) => {
            if settled {
                warn!(%mutation, error = %err, "interaction failed, reverted");
                push_error_toast(app_core, &format!("{} this Tweet", mutation.name()), &err).await;
            } else {
                debug!(%mutation, error = %err, "interaction failed after its toggle was reset");
            }
            Err(err)
        }
    }
}

/// Press reply on `tweet_id`.
///
/// Creating the reply is the composer's job; this only decides whether the
/// composer may open.
pub async fn request_reply(
    app_core: &Arc<RwLock<AppCore>>,
    tweet_id: &TweetId,
    in_reply_context: bool,
) -> Result<ReplyOutcome, ChirpError> {
    if in_reply_context {
        return Ok(ReplyOutcome::Disabled);
    }
    if !gate_actor(app_core).await.is_open() {
        return Ok(ReplyOutcome::SignInRequired);
    }
    let core = app_core.read().await;
    let tweet = core
        .views()
        .tweets()
        .get(tweet_id)
        .map(|card| card.reference())
        .ok_or_else(|| ChirpError::not_found(format!("Tweet {tweet_id} is not mounted")))?;
    Ok(ReplyOutcome::ComposerRequested { tweet })
}
