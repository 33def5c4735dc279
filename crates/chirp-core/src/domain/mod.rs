//! Backend documents and the interaction vocabulary.

pub mod interaction;
pub mod tweet;
pub mod user;

pub use interaction::{
    decide_direction, direction_from_membership, Direction, InteractionKind, Mutation,
};
pub use tweet::{StatTotals, Tweet, TweetRef};
pub use user::{is_bookmarked, Bookmark, User};
