//! # Tweet Card View State
//!
//! Per rendered tweet: the authoritative document as last observed, the
//! signed-in actor's like and retweet toggles, and the stats reconciler.
//!
//! The reconciler is fed *effective* totals: the document's counters adjusted
//! by whatever the toggles currently display. A pending like therefore bumps
//! the like counter right away, and a failed one animates back down.

use chirp_core::{
    ChirpError, Direction, InteractionKind, StatTotals, Tweet, TweetRef, UserId,
};
use serde::{Deserialize, Serialize};

use super::stats::{StatPresentation, StatsFrame, StatsReconciler};
use super::toggle::{MembershipToggle, ToggleTicket};

/// Tooltip of the like button when not liked.
pub const LIKE_TIP: &str = "Like";
/// Tooltip of the like button when liked.
pub const UNLIKE_TIP: &str = "Unlike";
/// Tooltip of the retweet button when not retweeted.
pub const RETWEET_TIP: &str = "Retweet";
/// Tooltip of the retweet button when retweeted.
pub const UNDO_RETWEET_TIP: &str = "Undo Retweet";
/// Tooltip of the reply button.
pub const REPLY_TIP: &str = "Reply";

/// View state of one rendered tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetCard {
    tweet: Tweet,
    actor: Option<UserId>,
    likes: MembershipToggle,
    retweets: MembershipToggle,
    stats: StatsReconciler,
}

impl TweetCard {
    /// Mount a card for `tweet` as seen by `actor`.
    pub fn new(tweet: Tweet, actor: Option<&UserId>, move_offset: i32) -> Self {
        let likes = MembershipToggle::new(actor.is_some_and(|a| tweet.is_liked_by(a)));
        let retweets = MembershipToggle::new(actor.is_some_and(|a| tweet.is_retweeted_by(a)));
        let stats = StatsReconciler::with_offset(tweet.totals(), move_offset);
        Self {
            tweet,
            actor: actor.cloned(),
            likes,
            retweets,
            stats,
        }
    }

    /// Authoritative document.
    pub fn tweet(&self) -> &Tweet {
        &self.tweet
    }

    /// Reference for like/unlike mutations.
    pub fn reference(&self) -> TweetRef {
        self.tweet.reference()
    }

    /// Like toggle of the current actor.
    pub fn likes(&self) -> &MembershipToggle {
        &self.likes
    }

    /// Retweet toggle of the current actor.
    pub fn retweets(&self) -> &MembershipToggle {
        &self.retweets
    }

    /// Stats reconciler.
    pub fn stats(&self) -> &StatsReconciler {
        &self.stats
    }

    /// Current per-counter presentation.
    pub fn presentation(&self) -> [StatPresentation; 3] {
        self.stats.presentation()
    }

    /// Whether to draw the tweet as liked.
    pub fn is_liked(&self) -> bool {
        self.likes.displayed_member()
    }

    /// Whether to draw the tweet as retweeted.
    pub fn is_retweeted(&self) -> bool {
        self.retweets.displayed_member()
    }

    /// Like button tooltip.
    pub fn like_tip(&self) -> &'static str {
        if self.is_liked() {
            UNLIKE_TIP
        } else {
            LIKE_TIP
        }
    }

    /// Retweet button tooltip.
    pub fn retweet_tip(&self) -> &'static str {
        if self.is_retweeted() {
            UNDO_RETWEET_TIP
        } else {
            RETWEET_TIP
        }
    }

    /// Authoritative membership set of `kind`.
    pub fn members(&self, kind: InteractionKind) -> Result<&[UserId], ChirpError> {
        match kind {
            InteractionKind::Like => Ok(&self.tweet.user_likes),
            InteractionKind::Retweet => Ok(&self.tweet.user_retweets),
            InteractionKind::Bookmark => Err(bookmark_not_on_card()),
        }
    }

    /// Totals adjusted by the optimistic toggles.
    pub fn effective_totals(&self) -> StatTotals {
        let totals = self.tweet.totals();
        StatTotals {
            replies: totals.replies,
            likes: adjust(totals.likes, self.likes.count_delta()),
            retweets: adjust(totals.retweets, self.retweets.count_delta()),
        }
    }

    /// Start an optimistic toggle. The ticket settles it later.
    pub fn begin(
        &mut self,
        kind: InteractionKind,
        direction: Direction,
    ) -> Result<(ToggleTicket, StatsFrame), ChirpError> {
        let ticket = self.toggle_mut(kind)?.begin(direction)?;
        Ok((ticket, self.reconcile()))
    }

    /// The backend accepted the toggle. The acknowledged write is applied to
    /// the document so later direction decisions see it before the next
    /// snapshot arrives.
    ///
    /// `Ok(None)` when the toggle started with `ticket` is no longer pending;
    /// nothing changes then.
    pub fn confirm(
        &mut self,
        kind: InteractionKind,
        ticket: ToggleTicket,
    ) -> Result<Option<StatsFrame>, ChirpError> {
        let Some(direction) = self.toggle_mut(kind)?.confirm(ticket) else {
            return Ok(None);
        };
        if let Some(actor) = self.actor.clone() {
            let set = match kind {
                InteractionKind::Like => &mut self.tweet.user_likes,
                InteractionKind::Retweet => &mut self.tweet.user_retweets,
                InteractionKind::Bookmark => return Err(bookmark_not_on_card()),
            };
            apply_membership(set, actor, direction);
        }
        Ok(Some(self.reconcile()))
    }

    /// The backend rejected the toggle; the display reverts. `Ok(None)` for a
    /// stale ticket, as with [`confirm`](Self::confirm).
    pub fn fail(
        &mut self,
        kind: InteractionKind,
        ticket: ToggleTicket,
        reason: impl Into<String>,
    ) -> Result<Option<StatsFrame>, ChirpError> {
        if self.toggle_mut(kind)?.fail(ticket, reason).is_none() {
            return Ok(None);
        }
        Ok(Some(self.reconcile()))
    }

    /// Adopt a fresh authoritative snapshot.
    pub fn observe_snapshot(&mut self, tweet: Tweet) -> StatsFrame {
        self.tweet = tweet;
        self.resync();
        self.reconcile()
    }

    /// Switch the actor (sign-in or sign-out) and re-derive memberships.
    pub fn set_actor(&mut self, actor: Option<&UserId>) -> StatsFrame {
        if self.actor.as_ref() != actor {
            self.actor = actor.cloned();
            self.likes = MembershipToggle::default();
            self.retweets = MembershipToggle::default();
            self.resync();
        }
        self.reconcile()
    }

    fn resync(&mut self) {
        let (liked, retweeted) = match &self.actor {
            Some(actor) => (
                self.tweet.is_liked_by(actor),
                self.tweet.is_retweeted_by(actor),
            ),
            None => (false, false),
        };
        self.likes.sync(liked);
        self.retweets.sync(retweeted);
    }

    fn reconcile(&mut self) -> StatsFrame {
        let totals = self.effective_totals();
        self.stats.observe(totals)
    }

    fn toggle_mut(&mut self, kind: InteractionKind) -> Result<&mut MembershipToggle, ChirpError> {
        match kind {
            InteractionKind::Like => Ok(&mut self.likes),
            InteractionKind::Retweet => Ok(&mut self.retweets),
            InteractionKind::Bookmark => Err(bookmark_not_on_card()),
        }
    }
}

fn bookmark_not_on_card() -> ChirpError {
    ChirpError::invalid("bookmarks belong to the user, not the tweet card")
}

fn adjust(total: u32, delta: i64) -> u32 {
    u32::try_from((i64::from(total) + delta).max(0)).unwrap_or(u32::MAX)
}

fn apply_membership(set: &mut Vec<UserId>, actor: UserId, direction: Direction) {
    match direction {
        Direction::Add => {
            if !set.contains(&actor) {
                set.push(actor);
            }
        }
        Direction::Remove => set.retain(|member| member != &actor),
    }
}
