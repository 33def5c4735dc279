//! # View State Module
//!
//! View state types the frontend renders from. All of them serialize, so they
//! can be dumped for debugging, and they are published through
//! futures-signals `Mutable`s in [`ViewState`].

mod state;

pub mod bookmarks;
pub mod collection;
pub mod notifications;
pub mod prompt;
pub mod search;
pub mod stats;
pub mod toggle;
pub mod tweet;

pub use state::{StateSnapshot, TweetsState, ViewState};

pub use bookmarks::BookmarksState;
pub use collection::OrderedCollection;
pub use notifications::{NotificationsState, Toast, ToastLevel, ToastLink};
pub use prompt::LoginPrompt;
pub use search::{SearchState, SearchStatus};
pub use stats::{
    move_direction, DisplayStats, StatKind, StatPresentation, StatsFrame, StatsReconciler,
};
pub use toggle::{MembershipToggle, ToggleTicket, TogglePhase};
pub use tweet::TweetCard;
