//! # RuntimeBridge: Abstract Backend Operations
//!
//! This module defines the `RuntimeBridge` trait, which abstracts every
//! operation that leaves the process: document mutations, the user search
//! query, authentication and the clock. `chirp-app` stays a pure application
//! core; a concrete backend client (or the in-memory bridge in
//! `chirp-testkit`) implements the trait.
//!
//! ```text
//! chirp-app (pure)          backend client
//! ┌─────────────────┐      ┌─────────────────┐
//! │ AppCore         │      │ DocumentClient  │
//! │   ┌───────────┐ │      │   implements    │
//! │   │RuntimeBridge│◄─────│   RuntimeBridge │
//! │   └───────────┘ │      │                 │
//! └─────────────────┘      └─────────────────┘
//! ```
//!
//! All mutation calls are add/remove of an actor id in a named collection.
//! None of them is specified to be idempotent, so callers issue each toggle
//! exactly once and never retry on their own.

use async_trait::async_trait;
use chirp_core::{Bookmark, ChirpError, Tweet, TweetId, TweetRef, User, UserId, UserQuery};
use std::sync::Arc;

/// Backend operations required by the application core.
#[async_trait]
pub trait RuntimeBridge: Send + Sync {
    // =========================================================================
    // Interaction mutations
    // =========================================================================

    /// Add `actor` to the likers of `tweet`.
    async fn like(&self, actor: &UserId, tweet: &TweetRef) -> Result<(), ChirpError>;

    /// Remove `actor` from the likers of `tweet`.
    async fn unlike(&self, actor: &UserId, tweet: &TweetRef) -> Result<(), ChirpError>;

    /// Add `actor` to the retweeters of `tweet`.
    async fn retweet(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError>;

    /// Remove `actor` from the retweeters of `tweet`.
    async fn unretweet(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError>;

    /// Add `tweet` to the bookmarks of `actor`.
    async fn bookmark(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError>;

    /// Remove `tweet` from the bookmarks of `actor`.
    async fn unbookmark(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError>;

    // =========================================================================
    // Reads
    // =========================================================================

    /// Run a username range query over the users collection.
    async fn search_users(&self, query: &UserQuery) -> Result<Vec<User>, ChirpError>;

    /// Fetch the current tweet document.
    async fn fetch_tweet(&self, tweet: &TweetId) -> Result<Option<Tweet>, ChirpError>;

    /// Fetch the bookmarks collection of a user.
    async fn fetch_bookmarks(&self, user: &UserId) -> Result<Vec<Bookmark>, ChirpError>;

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Run the provider sign-in flow and return the signed-in user.
    async fn sign_in(&self) -> Result<User, ChirpError>;

    /// End the provider session.
    async fn sign_out(&self) -> Result<(), ChirpError>;

    // =========================================================================
    // Time
    // =========================================================================

    /// Suspend for `ms` milliseconds.
    async fn sleep_ms(&self, ms: u64) -> Result<(), ChirpError>;

    /// Wall-clock time in milliseconds since the epoch.
    async fn current_time_ms(&self) -> Result<u64, ChirpError>;
}

/// Shared, type-erased bridge.
pub type BoxedRuntimeBridge = Arc<dyn RuntimeBridge>;
