//! Interaction vocabulary: what an actor can toggle and which remote call a
//! toggle turns into.

use crate::domain::tweet::TweetRef;
use crate::identifiers::{TweetId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A toggleable social interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Membership in the tweet's likers set
    Like,
    /// Membership in the tweet's retweeters set
    Retweet,
    /// Membership of the tweet in the actor's bookmarks
    Bookmark,
}

impl InteractionKind {
    /// Lowercase label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Retweet => "retweet",
            Self::Bookmark => "bookmark",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Insert the actor into the membership set
    Add,
    /// Remove the actor from the membership set
    Remove,
}

impl Direction {
    /// Membership after the toggle lands.
    pub fn target_membership(&self) -> bool {
        matches!(self, Self::Add)
    }

    /// The toggle that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }
}

/// Decide the next toggle direction from a membership set.
///
/// `Add` iff `actor` is absent. The set must be the authoritative one: a
/// toggle never sets membership explicitly, it flips whatever the backend
/// last reported.
pub fn decide_direction(members: &[UserId], actor: &UserId) -> Direction {
    direction_from_membership(members.contains(actor))
}

/// Same as [`decide_direction`] when membership is already known.
pub fn direction_from_membership(is_member: bool) -> Direction {
    if is_member {
        Direction::Remove
    } else {
        Direction::Add
    }
}

/// One of the six remote mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    /// Add `actor` to the likers of `tweet`
    Like { actor: UserId, tweet: TweetRef },
    /// Remove `actor` from the likers of `tweet`
    Unlike { actor: UserId, tweet: TweetRef },
    /// Add `actor` to the retweeters of `tweet`
    Retweet { actor: UserId, tweet: TweetId },
    /// Remove `actor` from the retweeters of `tweet`
    Unretweet { actor: UserId, tweet: TweetId },
    /// Add `tweet` to the bookmarks of `actor`
    Bookmark { actor: UserId, tweet: TweetId },
    /// Remove `tweet` from the bookmarks of `actor`
    Unbookmark { actor: UserId, tweet: TweetId },
}

impl Mutation {
    /// Build the mutation for a toggle of `kind` in `direction`.
    pub fn new(kind: InteractionKind, direction: Direction, actor: UserId, tweet: &TweetRef) -> Self {
        match (kind, direction) {
            (InteractionKind::Like, Direction::Add) => Self::Like {
                actor,
                tweet: tweet.clone(),
            },
            (InteractionKind::Like, Direction::Remove) => Self::Unlike {
                actor,
                tweet: tweet.clone(),
            },
            (InteractionKind::Retweet, Direction::Add) => Self::Retweet {
                actor,
                tweet: tweet.id.clone(),
            },
            (InteractionKind::Retweet, Direction::Remove) => Self::Unretweet {
                actor,
                tweet: tweet.id.clone(),
            },
            (InteractionKind::Bookmark, Direction::Add) => Self::Bookmark {
                actor,
                tweet: tweet.id.clone(),
            },
            (InteractionKind::Bookmark, Direction::Remove) => Self::Unbookmark {
                actor,
                tweet: tweet.id.clone(),
            },
        }
    }

    /// Bookmark toggles only need the tweet id.
    pub fn bookmark(direction: Direction, actor: UserId, tweet: TweetId) -> Self {
        match direction {
            Direction::Add => Self::Bookmark { actor, tweet },
            Direction::Remove => Self::Unbookmark { actor, tweet },
        }
    }

    /// Interaction this mutation toggles.
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Like { .. } | Self::Unlike { .. } => InteractionKind::Like,
            Self::Retweet { .. } | Self::Unretweet { .. } => InteractionKind::Retweet,
            Self::Bookmark { .. } | Self::Unbookmark { .. } => InteractionKind::Bookmark,
        }
    }

    /// Direction of the toggle.
    pub fn direction(&self) -> Direction {
        match self {
            Self::Like { .. } | Self::Retweet { .. } | Self::Bookmark { .. } => Direction::Add,
            Self::Unlike { .. } | Self::Unretweet { .. } | Self::Unbookmark { .. } => {
                Direction::Remove
            }
        }
    }

    /// Acting user.
    pub fn actor(&self) -> &UserId {
        match self {
            Self::Like { actor, .. }
            | Self::Unlike { actor, .. }
            | Self::Retweet { actor, .. }
            | Self::Unretweet { actor, .. }
            | Self::Bookmark { actor, .. }
            | Self::Unbookmark { actor, .. } => actor,
        }
    }

    /// Target tweet.
    pub fn tweet_id(&self) -> &TweetId {
        match self {
            Self::Like { tweet, .. } | Self::Unlike { tweet, .. } => &tweet.id,
            Self::Retweet { tweet, .. }
            | Self::Unretweet { tweet, .. }
            | Self::Bookmark { tweet, .. }
            | Self::Unbookmark { tweet, .. } => tweet,
        }
    }

    /// Remote call name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Like { .. } => "like",
            Self::Unlike { .. } => "unlike",
            Self::Retweet { .. } => "retweet",
            Self::Unretweet { .. } => "unretweet",
            Self::Bookmark { .. } => "bookmark",
            Self::Unbookmark { .. } => "unbookmark",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name(), self.actor(), self.tweet_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tweet() -> TweetRef {
        TweetRef {
            id: "t1".into(),
            created_by: "author".into(),
        }
    }

    #[test]
    fn test_direction_from_membership() {
        let members: Vec<UserId> = vec!["u7".into()];
        assert_eq!(decide_direction(&members, &"u42".into()), Direction::Add);
        assert_eq!(decide_direction(&members, &"u7".into()), Direction::Remove);
        assert_eq!(decide_direction(&[], &"u7".into()), Direction::Add);
    }

    #[test]
    fn test_mutation_mapping() {
        let m = Mutation::new(InteractionKind::Like, Direction::Add, "u42".into(), &tweet());
        assert_eq!(m.name(), "like");
        assert_eq!(m.to_string(), "like(u42, t1)");
        assert_eq!(m.kind(), InteractionKind::Like);
        assert_eq!(m.direction(), Direction::Add);

        let m = Mutation::new(
            InteractionKind::Bookmark,
            Direction::Remove,
            "u42".into(),
            &tweet(),
        );
        assert_eq!(m.name(), "unbookmark");
        assert_eq!(m.tweet_id().as_str(), "t1");
    }

    proptest! {
        #[test]
        fn prop_add_iff_absent(
            members in proptest::collection::vec("[a-z]{1,3}", 0..8),
            actor in "[a-z]{1,3}",
        ) {
            let members: Vec<UserId> = members.into_iter().map(UserId::from).collect();
            let actor = UserId::from(actor);
            let direction = decide_direction(&members, &actor);
            prop_assert_eq!(direction == Direction::Add, !members.contains(&actor));
            prop_assert_eq!(direction.inverse().inverse(), direction);
        }
    }
}
