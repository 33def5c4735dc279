//! # Chirp App - Headless Application Core
//!
//! Portable, headless application core for the Chirp client. Frontends render
//! from [`ViewState`] and call into [`workflows`]; everything that leaves the
//! process goes through a [`RuntimeBridge`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Frontend                   │
//! │      renders ViewState, calls workflows     │
//! └──────────────────────┬──────────────────────┘
//!                        │
//! ┌──────────────────────▼──────────────────────┐
//! │                  chirp-app                  │
//! │  AppCore { config, session, views }         │
//! │  workflows: interaction, bookmark, search   │
//! └──────────────────────┬──────────────────────┘
//!                        │ RuntimeBridge
//! ┌──────────────────────▼──────────────────────┐
//! │          backend client / testkit           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Optimistic interactions
//!
//! A like, retweet or bookmark flips the displayed membership immediately,
//! issues exactly one mutation and then either confirms or reverts. Counter
//! animations come from [`views::StatsReconciler`], which replaces the
//! displayed counters wholesale whenever the totals change.

#![forbid(unsafe_code)]

pub mod core;
pub mod errors;
pub mod gate;
pub mod runtime_bridge;
pub mod views;
pub mod workflows;

pub use crate::core::{AppConfig, AppCore, SessionContext};
pub use errors::{AppError, ErrorCategory};
pub use gate::{guard, Gate};
pub use runtime_bridge::{BoxedRuntimeBridge, RuntimeBridge};
pub use views::{StateSnapshot, ViewState};

pub use chirp_core::{
    Bookmark, ChirpError, Direction, InteractionKind, Mutation, StatTotals, Tweet, TweetId,
    TweetRef, User, UserId, UserQuery,
};
