//! # Workflows - Portable Business Logic
//!
//! Multi-step operations shared by every frontend. All workflows follow the
//! same pattern:
//!
//! - take `&Arc<RwLock<AppCore>>`
//! - read the session and views under a short lock
//! - call the backend through the runtime bridge with no lock held
//! - write the outcome back into `ViewState`, which notifies subscribers
//! - return `Result<T, ChirpError>`; a sign-in requirement is an outcome
//!   variant, never an error
//!
//! ```rust,ignore
//! let outcome = workflows::interaction::toggle_like(&app_core, &tweet_id).await?;
//! if outcome == InteractionOutcome::SignInRequired {
//!     // the sign-in prompt is already open
//! }
//! ```

pub mod auth;
pub mod bookmark;
pub mod feed;
pub mod interaction;
pub mod runtime;
pub mod search;
pub mod state_helpers;

pub use auth::{cancel_sign_in, gate_actor, sign_in, sign_out};
pub use bookmark::toggle_bookmark;
pub use feed::{
    dismiss_toast, drop_tweet, observe_bookmarks, observe_tweet, refresh_bookmarks,
    refresh_tweet, tweet_stats,
};
pub use interaction::{
    execute, request_reply, toggle_like, toggle_retweet, InteractionOutcome, ReplyOutcome,
};
pub use search::{on_search_input, SearchOutcome};
