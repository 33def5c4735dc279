//! Tweet documents as the backend stores them.

use crate::identifiers::{TweetId, UserId};
use serde::{Deserialize, Serialize};

/// Authoritative tweet document.
///
/// `user_likes` and `user_retweets` are membership sets keyed by actor id;
/// `user_replies` is a plain counter maintained by the reply flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Document id
    pub id: TweetId,
    /// Author of the tweet
    pub created_by: UserId,
    /// Actors who liked the tweet
    #[serde(default)]
    pub user_likes: Vec<UserId>,
    /// Actors who retweeted the tweet
    #[serde(default)]
    pub user_retweets: Vec<UserId>,
    /// Number of replies
    #[serde(default)]
    pub user_replies: u32,
}

impl Tweet {
    /// Create an empty tweet authored by `created_by`.
    pub fn new(id: impl Into<TweetId>, created_by: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            created_by: created_by.into(),
            ..Self::default()
        }
    }

    /// Reference carried by the like/unlike mutations.
    pub fn reference(&self) -> TweetRef {
        TweetRef {
            id: self.id.clone(),
            created_by: self.created_by.clone(),
        }
    }

    /// Whether `actor` appears in the likers set.
    pub fn is_liked_by(&self, actor: &UserId) -> bool {
        self.user_likes.contains(actor)
    }

    /// Whether `actor` appears in the retweeters set.
    pub fn is_retweeted_by(&self, actor: &UserId) -> bool {
        self.user_retweets.contains(actor)
    }

    /// Authoritative counters derived from the document.
    pub fn totals(&self) -> StatTotals {
        StatTotals {
            replies: self.user_replies,
            likes: count(&self.user_likes),
            retweets: count(&self.user_retweets),
        }
    }
}

fn count(members: &[UserId]) -> u32 {
    u32::try_from(members.len()).unwrap_or(u32::MAX)
}

/// Minimal tweet reference: the like mutation also touches the author's
/// liked-tweets bookkeeping, so it needs both ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetRef {
    /// Tweet id
    pub id: TweetId,
    /// Author id
    pub created_by: UserId,
}

/// The three authoritative counters shown under a tweet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTotals {
    /// Reply count
    pub replies: u32,
    /// Like count
    pub likes: u32,
    /// Retweet count
    pub retweets: u32,
}

impl StatTotals {
    /// Construct from the three counters.
    pub fn new(replies: u32, likes: u32, retweets: u32) -> Self {
        Self {
            replies,
            likes,
            retweets,
        }
    }

    /// True when every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.replies == 0 && self.likes == 0 && self.retweets == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_follow_membership_sets() {
        let mut tweet = Tweet::new("t1", "author");
        tweet.user_likes = vec!["u7".into(), "u42".into()];
        tweet.user_retweets = vec!["u7".into()];
        tweet.user_replies = 3;

        assert_eq!(tweet.totals(), StatTotals::new(3, 2, 1));
        assert!(tweet.is_liked_by(&"u42".into()));
        assert!(!tweet.is_retweeted_by(&"u42".into()));
    }

    #[test]
    fn test_document_uses_backend_field_names() {
        let json = r#"{"id":"t1","createdBy":"a","userLikes":["u7"],"userReplies":2}"#;
        let tweet: Tweet = serde_json::from_str(json).unwrap();
        assert_eq!(tweet.user_likes, vec![UserId::from("u7")]);
        assert!(tweet.user_retweets.is_empty());
        assert_eq!(tweet.totals(), StatTotals::new(2, 1, 0));
    }

    #[test]
    fn test_empty_totals() {
        assert!(StatTotals::default().is_empty());
        assert!(!StatTotals::new(0, 0, 1).is_empty());
    }
}
