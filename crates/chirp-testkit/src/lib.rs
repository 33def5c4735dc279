//! Chirp Testing Infrastructure
//!
//! An in-memory [`MockRuntime`] implementing `RuntimeBridge`, plus fixtures
//! for building tweets and wiring an `AppCore` around the mock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```rust,ignore
//! use chirp_testkit::*;
//!
//! #[tokio::test(start_paused = true)]
//! async fn likes_are_confirmed() {
//!     let runtime = MockRuntime::new().with_tweet(tweet("t1", "author", &["u7"]));
//!     let app = signed_in_app(&runtime, user("u42", "alice"));
//!     // ... drive workflows
//! }
//! ```

pub mod fixtures;
pub mod mock_runtime;

pub use fixtures::*;
pub use mock_runtime::MockRuntime;

/// Install a `tracing` subscriber honoring `RUST_LOG`. Safe to call from
/// every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
