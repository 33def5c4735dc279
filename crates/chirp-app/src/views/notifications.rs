//! # Toast Notifications
//!
//! Toasts are queued here by workflows and drained by the frontend. The queue
//! is bounded; when it is full the oldest toast is dropped.

use chirp_core::Direction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::core::config::{DEFAULT_MAX_PENDING_TOASTS, DEFAULT_TOAST_DURATION_MS};

/// Toast shown after a bookmark was removed.
pub const BOOKMARK_REMOVED_MESSAGE: &str = "Tweet removed from your bookmarks";

/// Toast shown after a bookmark was added.
pub const BOOKMARK_ADDED_MESSAGE: &str = "Tweet added to your bookmarks";

/// Label of the link attached to [`BOOKMARK_ADDED_MESSAGE`].
pub const BOOKMARK_LINK_LABEL: &str = "View";

/// Toast severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Neutral information
    #[default]
    Info,
    /// An action completed
    Success,
    /// Something may need attention
    Warning,
    /// An action failed
    Error,
}

/// Navigational affordance inside a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastLink {
    /// Link text
    pub label: String,
    /// Route to navigate to
    pub href: String,
}

/// A queued toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique id, used to dismiss
    pub id: Uuid,
    /// Severity
    pub level: ToastLevel,
    /// Text
    pub message: String,
    /// Optional link rendered after the text
    pub link: Option<ToastLink>,
    /// Display duration
    pub duration_ms: u64,
}

impl Toast {
    /// New toast with the default duration.
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            link: None,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    /// Success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    /// Attach a link.
    #[must_use]
    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(ToastLink {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    /// Override the duration.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Toast for a completed bookmark toggle. Only additions link back to the
    /// bookmarks listing.
    pub fn bookmark_result(direction: Direction, bookmarks_href: &str) -> Self {
        match direction {
            Direction::Remove => Self::success(BOOKMARK_REMOVED_MESSAGE),
            Direction::Add => {
                Self::success(BOOKMARK_ADDED_MESSAGE).with_link(BOOKMARK_LINK_LABEL, bookmarks_href)
            }
        }
    }
}

/// Bounded toast queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsState {
    toasts: VecDeque<Toast>,
    capacity: usize,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_PENDING_TOASTS)
    }
}

impl NotificationsState {
    /// Queue holding at most `capacity` toasts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Queue a toast, dropping the oldest when full.
    pub fn push(&mut self, toast: Toast) {
        while self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Remove a toast by id. Returns whether it was queued.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Newest toast.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// All queued toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of queued toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_toasts() {
        let removed = Toast::bookmark_result(Direction::Remove, "/bookmarks");
        assert_eq!(removed.message, "Tweet removed from your bookmarks");
        assert!(removed.link.is_none());

        let added = Toast::bookmark_result(Direction::Add, "/bookmarks");
        assert_eq!(added.message, "Tweet added to your bookmarks");
        assert_eq!(
            added.link,
            Some(ToastLink {
                label: "View".to_string(),
                href: "/bookmarks".to_string()
            })
        );
        assert_eq!(added.level, ToastLevel::Success);
    }

    #[test]
    fn test_queue_drops_oldest() {
        let mut state = NotificationsState::with_capacity(2);
        state.push(Toast::success("one"));
        state.push(Toast::success("two"));
        state.push(Toast::success("three"));
        let messages: Vec<_> = state.toasts().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss() {
        let mut state = NotificationsState::default();
        let toast = Toast::success("done");
        let id = toast.id;
        state.push(toast);
        assert!(state.dismiss(id));
        assert!(!state.dismiss(id));
        assert!(state.is_empty());
    }
}
