//! User and bookmark documents.

use crate::identifiers::{TweetId, UserId};
use serde::{Deserialize, Serialize};

/// Public user document, as returned by the users collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document id
    pub id: UserId,
    /// Unique handle, the search key
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Create a user whose display name equals its username.
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: id.into(),
            name: username.clone(),
            username,
        }
    }
}

/// Entry of a user's bookmarks collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Bookmarked tweet
    pub id: TweetId,
    /// When the bookmark was written (ms since epoch)
    #[serde(default)]
    pub created_at_ms: u64,
}

/// Whether `tweet` is present in a bookmark set.
pub fn is_bookmarked(bookmarks: &[Bookmark], tweet: &TweetId) -> bool {
    bookmarks.iter().any(|b| &b.id == tweet)
}
