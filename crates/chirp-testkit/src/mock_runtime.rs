//! In-memory runtime bridge
//!
//! `MockRuntime` stores tweet, user and bookmark documents in memory and
//! applies mutations to them the way the hosted backend would. Failures and
//! latencies are scripted per test.
//!
//! # Blocking Lock Usage
//!
//! Uses `std::sync::Mutex` because this is test infrastructure where the lock
//! is never held across an await and the simpler synchronous API keeps tests
//! readable.

use async_trait::async_trait;
use chirp_app::RuntimeBridge;
use chirp_core::{
    Bookmark, ChirpError, Mutation, Tweet, TweetId, TweetRef, User, UserId, UserQuery,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Scriptable in-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MockRuntime {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    tweets: HashMap<TweetId, Tweet>,
    users: Vec<User>,
    bookmarks: HashMap<UserId, Vec<Bookmark>>,
    /// Every mutation issued, in call order, including failed ones
    mutations: Vec<Mutation>,
    /// Every search query issued, in call order
    queries: Vec<UserQuery>,
    mutation_failures: VecDeque<ChirpError>,
    search_failures: VecDeque<ChirpError>,
    clock_failures: VecDeque<ChirpError>,
    /// Extra latency per search prefix
    search_delays: HashMap<String, u64>,
    mutation_delay_ms: u64,
    sign_in_user: Option<User>,
    sign_outs: u32,
    now_ms: u64,
}

impl MockState {
    fn apply(&mut self, mutation: &Mutation) -> Result<(), ChirpError> {
        match mutation {
            Mutation::Like { actor, tweet } => {
                add_member(&mut self.tweet_mut(&tweet.id)?.user_likes, actor);
            }
            Mutation::Unlike { actor, tweet } => {
                self.tweet_mut(&tweet.id)?.user_likes.retain(|m| m != actor);
            }
            Mutation::Retweet { actor, tweet } => {
                add_member(&mut self.tweet_mut(tweet)?.user_retweets, actor);
            }
            Mutation::Unretweet { actor, tweet } => {
                self.tweet_mut(tweet)?.user_retweets.retain(|m| m != actor);
            }
            Mutation::Bookmark { actor, tweet } => {
                let now_ms = self.now_ms;
                let list = self.bookmarks.entry(actor.clone()).or_default();
                if !list.iter().any(|b| &b.id == tweet) {
                    list.push(Bookmark {
                        id: tweet.clone(),
                        created_at_ms: now_ms,
                    });
                }
            }
            Mutation::Unbookmark { actor, tweet } => {
                if let Some(list) = self.bookmarks.get_mut(actor) {
                    list.retain(|b| &b.id != tweet);
                }
            }
        }
        Ok(())
    }

    fn tweet_mut(&mut self, id: &TweetId) -> Result<&mut Tweet, ChirpError> {
        self.tweets
            .get_mut(id)
            .ok_or_else(|| ChirpError::not_found(format!("Tweet {id} does not exist")))
    }
}

fn add_member(set: &mut Vec<UserId>, actor: &UserId) {
    if !set.contains(actor) {
        set.push(actor.clone());
    }
}

impl MockRuntime {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ─── Seeding ─────────────────────────────────────────────

    /// Store a tweet document.
    pub fn with_tweet(self, tweet: Tweet) -> Self {
        self.lock().tweets.insert(tweet.id.clone(), tweet);
        self
    }

    /// Store a user document.
    pub fn with_user(self, user: User) -> Self {
        self.lock().users.push(user);
        self
    }

    /// Store several user documents.
    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        self.lock().users.extend(users);
        self
    }

    /// Seed the bookmarks of `actor`.
    pub fn with_bookmarks(self, actor: impl Into<UserId>, bookmarks: Vec<Bookmark>) -> Self {
        self.lock().bookmarks.insert(actor.into(), bookmarks);
        self
    }

    /// User returned by `sign_in`. Without one, sign-in is refused.
    pub fn with_sign_in_user(self, user: User) -> Self {
        self.lock().sign_in_user = Some(user);
        self
    }

    /// Latency of every mutation.
    pub fn with_mutation_delay(self, delay_ms: u64) -> Self {
        self.lock().mutation_delay_ms = delay_ms;
        self
    }

    /// Latency of searches for exactly `prefix`.
    pub fn with_search_delay(self, prefix: impl Into<String>, delay_ms: u64) -> Self {
        self.lock().search_delays.insert(prefix.into(), delay_ms);
        self
    }

    // ─── Scripting ───────────────────────────────────────────

    /// Fail the next mutation with `err`; the documents stay untouched.
    pub fn fail_next_mutation(&self, err: ChirpError) {
        self.lock().mutation_failures.push_back(err);
    }

    /// Fail the next search with `err`.
    pub fn fail_next_search(&self, err: ChirpError) {
        self.lock().search_failures.push_back(err);
    }

    /// Fail the next clock read with `err`.
    pub fn fail_next_clock(&self, err: ChirpError) {
        self.lock().clock_failures.push_back(err);
    }

    /// User returned by the next `sign_in`, as when someone else signs in.
    pub fn set_sign_in_user(&self, user: User) {
        self.lock().sign_in_user = Some(user);
    }

    /// Set the backend clock.
    pub fn set_time_ms(&self, now_ms: u64) {
        self.lock().now_ms = now_ms;
    }

    /// Replace a stored tweet, as another client would.
    pub fn put_tweet(&self, tweet: Tweet) {
        self.lock().tweets.insert(tweet.id.clone(), tweet);
    }

    // ─── Inspection ──────────────────────────────────────────

    /// Mutations issued so far.
    pub fn mutations(&self) -> Vec<Mutation> {
        self.lock().mutations.clone()
    }

    /// Search queries issued so far.
    pub fn queries(&self) -> Vec<UserQuery> {
        self.lock().queries.clone()
    }

    /// Stored tweet document.
    pub fn tweet(&self, id: &TweetId) -> Option<Tweet> {
        self.lock().tweets.get(id).cloned()
    }

    /// Stored bookmarks of `actor`.
    pub fn bookmarks_of(&self, actor: &UserId) -> Vec<Bookmark> {
        self.lock().bookmarks.get(actor).cloned().unwrap_or_default()
    }

    /// Number of `sign_out` calls.
    pub fn sign_outs(&self) -> u32 {
        self.lock().sign_outs
    }

    async fn mutate(&self, mutation: Mutation) -> Result<(), ChirpError> {
        let delay_ms = {
            let mut state = self.lock();
            state.mutations.push(mutation.clone());
            state.mutation_delay_ms
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut state = self.lock();
        if let Some(err) = state.mutation_failures.pop_front() {
            tracing::debug!(%mutation, error = %err, "scripted mutation failure");
            return Err(err);
        }
        state.apply(&mutation)
    }
}

#[async_trait]
impl RuntimeBridge for MockRuntime {
    async fn like(&self, actor: &UserId, tweet: &TweetRef) -> Result<(), ChirpError> {
        self.mutate(Mutation::Like {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn unlike(&self, actor: &UserId, tweet: &TweetRef) -> Result<(), ChirpError> {
        self.mutate(Mutation::Unlike {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn retweet(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError> {
        self.mutate(Mutation::Retweet {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn unretweet(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError> {
        self.mutate(Mutation::Unretweet {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn bookmark(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError> {
        self.mutate(Mutation::Bookmark {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn unbookmark(&self, actor: &UserId, tweet: &TweetId) -> Result<(), ChirpError> {
        self.mutate(Mutation::Unbookmark {
            actor: actor.clone(),
            tweet: tweet.clone(),
        })
        .await
    }

    async fn search_users(&self, query: &UserQuery) -> Result<Vec<User>, ChirpError> {
        let delay_ms = {
            let mut state = self.lock();
            state.queries.push(query.clone());
            state.search_delays.get(&query.prefix).copied().unwrap_or(0)
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut state = self.lock();
        if let Some(err) = state.search_failures.pop_front() {
            return Err(err);
        }
        Ok(query.evaluate(state.users.iter()))
    }

    async fn fetch_tweet(&self, id: &TweetId) -> Result<Option<Tweet>, ChirpError> {
        Ok(self.tweet(id))
    }

    async fn fetch_bookmarks(&self, actor: &UserId) -> Result<Vec<Bookmark>, ChirpError> {
        Ok(self.bookmarks_of(actor))
    }

    async fn sign_in(&self) -> Result<User, ChirpError> {
        self.lock()
            .sign_in_user
            .clone()
            .ok_or_else(|| ChirpError::permission_denied("Sign-in was cancelled"))
    }

    async fn sign_out(&self) -> Result<(), ChirpError> {
        self.lock().sign_outs += 1;
        Ok(())
    }

    async fn sleep_ms(&self, duration_ms: u64) -> Result<(), ChirpError> {
        tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        Ok(())
    }

    async fn current_time_ms(&self) -> Result<u64, ChirpError> {
        let mut state = self.lock();
        match state.clock_failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(state.now_ms),
        }
    }
}
