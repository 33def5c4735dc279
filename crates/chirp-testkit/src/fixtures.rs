//! Document builders and `AppCore` wiring for tests.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_app::{AppConfig, AppCore, SessionContext};
use chirp_core::{Bookmark, Tweet, User, UserId};

use crate::mock_runtime::MockRuntime;

/// Tweet `id` by `author` liked by `likers`.
pub fn tweet(id: &str, author: &str, likers: &[&str]) -> Tweet {
    let mut tweet = Tweet::new(id, author);
    tweet.user_likes = likers.iter().map(|l| UserId::from(*l)).collect();
    tweet
}

/// User document.
pub fn user(id: &str, username: &str) -> User {
    User::new(id, username)
}

/// Bookmark of `tweet_id` made at `created_at_ms`.
pub fn bookmark(tweet_id: &str, created_at_ms: u64) -> Bookmark {
    Bookmark {
        id: tweet_id.into(),
        created_at_ms,
    }
}

/// Anonymous `AppCore` with default config wired to `runtime`.
pub fn app_with_runtime(runtime: &MockRuntime) -> Arc<RwLock<AppCore>> {
    app_with_config(runtime, AppConfig::default())
}

/// Anonymous `AppCore` with `config` wired to `runtime`.
pub fn app_with_config(runtime: &MockRuntime, config: AppConfig) -> Arc<RwLock<AppCore>> {
    let core = AppCore::with_runtime(config, Arc::new(runtime.clone()))
        .expect("test config should validate");
    Arc::new(RwLock::new(core))
}

/// `AppCore` wired to `runtime` with `user` already signed in.
pub fn signed_in_app(runtime: &MockRuntime, user: User) -> Arc<RwLock<AppCore>> {
    let app = app_with_runtime(runtime);
    app.try_write()
        .expect("fresh app core is unlocked")
        .set_session(SessionContext::signed_in(user));
    app
}
