//! # View State
//!
//! One `Mutable` per view so a frontend can subscribe to exactly what it
//! renders. Workflows replace a view wholesale through the `set_*` methods;
//! subscribers are notified on every set.

use chirp_core::{ChirpError, TweetId};
use futures_signals::signal::{Mutable, Signal};
use serde::{Deserialize, Serialize};

use super::bookmarks::BookmarksState;
use super::collection::OrderedCollection;
use super::notifications::NotificationsState;
use super::prompt::LoginPrompt;
use super::search::SearchState;
use super::tweet::TweetCard;

/// Mounted tweet cards in feed order.
pub type TweetsState = OrderedCollection<TweetId, TweetCard>;

/// Plain copy of every view, for tests and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Tweet cards
    pub tweets: TweetsState,
    /// Bookmarks of the signed-in user
    pub bookmarks: BookmarksState,
    /// Search box
    pub search: SearchState,
    /// Toast queue
    pub notifications: NotificationsState,
    /// Sign-in prompt
    pub login_prompt: LoginPrompt,
}

impl StateSnapshot {
    /// Pretty JSON dump for debugging.
    pub fn to_json_pretty(&self) -> Result<String, ChirpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reactive view state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    tweets: Mutable<TweetsState>,
    bookmarks: Mutable<BookmarksState>,
    search: Mutable<SearchState>,
    notifications: Mutable<NotificationsState>,
    login_prompt: Mutable<LoginPrompt>,
}

impl ViewState {
    /// Views with a toast queue of the given capacity.
    pub fn with_toast_capacity(capacity: usize) -> Self {
        Self {
            notifications: Mutable::new(NotificationsState::with_capacity(capacity)),
            ..Self::default()
        }
    }

    /// Copy every view.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            tweets: self.tweets.get_cloned(),
            bookmarks: self.bookmarks.get_cloned(),
            search: self.search.get_cloned(),
            notifications: self.notifications.get_cloned(),
            login_prompt: self.login_prompt.get(),
        }
    }

    // ─── Reads ───────────────────────────────────────────────

    /// Tweet cards.
    pub fn tweets(&self) -> TweetsState {
        self.tweets.get_cloned()
    }

    /// Bookmarks.
    pub fn bookmarks(&self) -> BookmarksState {
        self.bookmarks.get_cloned()
    }

    /// Search box.
    pub fn search(&self) -> SearchState {
        self.search.get_cloned()
    }

    /// Toast queue.
    pub fn notifications(&self) -> NotificationsState {
        self.notifications.get_cloned()
    }

    /// Sign-in prompt.
    pub fn login_prompt(&self) -> LoginPrompt {
        self.login_prompt.get()
    }

    // ─── Writes ──────────────────────────────────────────────

    /// Replace the tweet cards.
    pub fn set_tweets(&self, state: TweetsState) {
        self.tweets.set(state);
    }

    /// Replace the bookmarks.
    pub fn set_bookmarks(&self, state: BookmarksState) {
        self.bookmarks.set(state);
    }

    /// Replace the search box.
    pub fn set_search(&self, state: SearchState) {
        self.search.set(state);
    }

    /// Replace the toast queue.
    pub fn set_notifications(&self, state: NotificationsState) {
        self.notifications.set(state);
    }

    /// Replace the sign-in prompt.
    pub fn set_login_prompt(&self, state: LoginPrompt) {
        self.login_prompt.set(state);
    }

    // ─── Signals ─────────────────────────────────────────────

    /// Tweet card changes.
    pub fn tweets_signal(&self) -> impl Signal<Item = TweetsState> + Send + Sync + 'static {
        self.tweets.signal_cloned()
    }

    /// Bookmark changes.
    pub fn bookmarks_signal(&self) -> impl Signal<Item = BookmarksState> + Send + Sync + 'static {
        self.bookmarks.signal_cloned()
    }

    /// Search box changes.
    pub fn search_signal(&self) -> impl Signal<Item = SearchState> + Send + Sync + 'static {
        self.search.signal_cloned()
    }

    /// Toast queue changes.
    pub fn notifications_signal(
        &self,
    ) -> impl Signal<Item = NotificationsState> + Send + Sync + 'static {
        self.notifications.signal_cloned()
    }

    /// Sign-in prompt changes.
    pub fn login_prompt_signal(&self) -> impl Signal<Item = LoginPrompt> + Send + Sync + 'static {
        self.login_prompt.signal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use futures_signals::signal::SignalExt;

    #[test]
    fn test_snapshot_reflects_sets() {
        let views = ViewState::with_toast_capacity(3);
        let mut prompt = views.login_prompt();
        prompt.open();
        views.set_login_prompt(prompt);

        let snapshot = views.snapshot();
        assert!(snapshot.login_prompt.is_open());
        assert!(snapshot.tweets.is_empty());

        let json = snapshot.to_json_pretty().unwrap();
        assert!(json.contains("\"login_prompt\""));
    }

    #[test]
    fn test_signal_sees_latest_value() {
        let views = ViewState::default();
        let mut stream = views.login_prompt_signal().to_stream();

        let mut prompt = LoginPrompt::default();
        prompt.open();
        views.set_login_prompt(prompt);

        let seen = futures::executor::block_on(stream.next());
        assert_eq!(seen.map(|p| p.is_open()), Some(true));
    }
}
