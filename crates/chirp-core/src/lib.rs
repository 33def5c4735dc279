//! Chirp Core - documents and vocabulary for the Chirp client
//!
//! This crate holds the pure types shared by the application core and its
//! runtime bridges. It has no async runtime and performs no I/O.
//!
//! - Identifiers: [`UserId`], [`TweetId`]
//! - Documents: [`Tweet`], [`User`], [`Bookmark`]
//! - Interactions: [`InteractionKind`], [`Direction`], [`Mutation`], [`decide_direction`]
//! - Search: [`UserQuery`] prefix range queries
//! - Errors: [`ChirpError`]

#![forbid(unsafe_code)]

pub mod domain;
pub mod errors;
pub mod identifiers;
pub mod query;

pub use domain::{
    decide_direction, direction_from_membership, is_bookmarked, Bookmark, Direction,
    InteractionKind, Mutation, StatTotals, Tweet, TweetRef, User,
};
pub use errors::{ChirpError, Result};
pub use identifiers::{TweetId, UserId};
pub use query::{UserQuery, DEFAULT_SEARCH_LIMIT, PREFIX_RANGE_SENTINEL};
