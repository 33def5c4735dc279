//! # Bookmarks View State
//!
//! The signed-in user's bookmarks collection as last observed, plus one
//! [`MembershipToggle`] per tweet that has been toggled this session.

use chirp_core::{is_bookmarked, Bookmark, ChirpError, Direction, TweetId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::toggle::{MembershipToggle, ToggleTicket};

/// Tooltip when the tweet is not bookmarked.
pub const BOOKMARK_TIP: &str = "Bookmark";

/// Tooltip when the tweet is bookmarked.
pub const REMOVE_BOOKMARK_TIP: &str = "Remove Tweet from Bookmarks";

/// Bookmarks of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarksState {
    bookmarks: Vec<Bookmark>,
    toggles: HashMap<TweetId, MembershipToggle>,
}

impl BookmarksState {
    /// Start from an authoritative bookmark list.
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks,
            toggles: HashMap::new(),
        }
    }

    /// Authoritative bookmark list.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Whether `tweet` is in the authoritative list.
    pub fn is_bookmarked(&self, tweet: &TweetId) -> bool {
        is_bookmarked(&self.bookmarks, tweet)
    }

    /// Whether to draw `tweet` as bookmarked.
    pub fn displayed(&self, tweet: &TweetId) -> bool {
        self.toggles
            .get(tweet)
            .map_or_else(|| self.is_bookmarked(tweet), MembershipToggle::displayed_member)
    }

    /// Toggle state of `tweet`, if it was ever toggled.
    pub fn toggle(&self, tweet: &TweetId) -> Option<&MembershipToggle> {
        self.toggles.get(tweet)
    }

    /// Tooltip for the bookmark button.
    pub fn tip(&self, tweet: &TweetId) -> &'static str {
        if self.displayed(tweet) {
            REMOVE_BOOKMARK_TIP
        } else {
            BOOKMARK_TIP
        }
    }

    /// Replace the list with a fresh snapshot.
    pub fn replace(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks = bookmarks;
        for (tweet, toggle) in &mut self.toggles {
            toggle.sync(is_bookmarked(&self.bookmarks, tweet));
        }
    }

    /// Forget everything (sign-out).
    pub fn clear(&mut self) {
        self.bookmarks.clear();
        self.toggles.clear();
    }

    /// Start an optimistic toggle on `tweet`.
    pub fn begin(
        &mut self,
        tweet: &TweetId,
        direction: Direction,
    ) -> Result<ToggleTicket, ChirpError> {
        let confirmed = self.is_bookmarked(tweet);
        self.toggles
            .entry(tweet.clone())
            .or_insert_with(|| MembershipToggle::new(confirmed))
            .begin(direction)
    }

    /// The backend accepted the toggle; patch the list to match.
    ///
    /// `None` when the toggle started with `ticket` is gone (cleared by a
    /// sign-out or superseded).
    pub fn confirm(
        &mut self,
        tweet: &TweetId,
        ticket: ToggleTicket,
        created_at_ms: u64,
    ) -> Option<Direction> {
        let direction = self.toggles.get_mut(tweet)?.confirm(ticket)?;
        match direction {
            Direction::Add => {
                if !self.is_bookmarked(tweet) {
                    self.bookmarks.push(Bookmark {
                        id: tweet.clone(),
                        created_at_ms,
                    });
                }
            }
            Direction::Remove => self.bookmarks.retain(|b| &b.id != tweet),
        }
        Some(direction)
    }

    /// The backend rejected the toggle.
    pub fn fail(
        &mut self,
        tweet: &TweetId,
        ticket: ToggleTicket,
        reason: impl Into<String>,
    ) -> Option<Direction> {
        self.toggles.get_mut(tweet)?.fail(ticket, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str) -> Bookmark {
        Bookmark {
            id: id.into(),
            created_at_ms: 1,
        }
    }

    #[test]
    fn test_confirmed_add_patches_list() {
        let mut state = BookmarksState::default();
        let tweet = TweetId::from("t1");
        let ticket = state.begin(&tweet, Direction::Add).unwrap();
        assert!(state.displayed(&tweet));
        assert!(!state.is_bookmarked(&tweet));
        assert_eq!(state.tip(&tweet), "Remove Tweet from Bookmarks");

        assert_eq!(state.confirm(&tweet, ticket, 99), Some(Direction::Add));
        assert!(state.is_bookmarked(&tweet));
        assert_eq!(state.bookmarks()[0].created_at_ms, 99);
    }

    #[test]
    fn test_failed_remove_restores_bookmark() {
        let tweet = TweetId::from("t1");
        let mut state = BookmarksState::from_bookmarks(vec![bookmark("t1")]);
        let ticket = state.begin(&tweet, Direction::Remove).unwrap();
        assert!(!state.displayed(&tweet));

        state.fail(&tweet, ticket, "offline");
        assert!(state.displayed(&tweet));
        assert!(state.toggle(&tweet).is_some_and(MembershipToggle::is_failed));
    }

    #[test]
    fn test_snapshot_syncs_toggles() {
        let tweet = TweetId::from("t2");
        let mut state = BookmarksState::default();
        let ticket = state.begin(&tweet, Direction::Add).unwrap();
        state.fail(&tweet, ticket, "offline");

        state.replace(vec![bookmark("t2")]);
        assert!(state.displayed(&tweet));
        assert!(!state.toggle(&tweet).is_some_and(MembershipToggle::is_failed));
    }

    #[test]
    fn test_cleared_toggle_ignores_late_result() {
        let tweet = TweetId::from("t1");
        let mut state = BookmarksState::default();
        let stale = state.begin(&tweet, Direction::Add).unwrap();

        state.clear();
        assert_eq!(state.confirm(&tweet, stale, 5), None);
        assert!(state.bookmarks().is_empty());

        let current = state.begin(&tweet, Direction::Add).unwrap();
        assert_eq!(state.fail(&tweet, stale, "offline"), None);
        assert!(state.displayed(&tweet));
        assert_eq!(state.confirm(&tweet, current, 6), Some(Direction::Add));
    }
}
