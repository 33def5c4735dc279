//! ViewState read-modify-write helpers for workflows.
//!
//! Each helper holds the write lock only for the synchronous update, never
//! across a bridge call.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::ChirpError;

use crate::errors::AppError;
use crate::views::{
    BookmarksState, LoginPrompt, NotificationsState, SearchState, Toast, TweetsState,
};
use crate::AppCore;

/// Read-modify-write helper for the tweet cards.
pub async fn with_tweets<T>(
    app_core: &Arc<RwLock<AppCore>>,
    update: impl FnOnce(&mut TweetsState) -> T,
) -> T {
    let core = app_core.write().await;
    let mut state = core.views().tweets();
    let output = update(&mut state);
    core.views().set_tweets(state);
    output
}

/// Read-modify-write helper for the bookmarks.
pub async fn with_bookmarks<T>(
    app_core: &Arc<RwLock<AppCore>>,
    update: impl FnOnce(&mut BookmarksState) -> T,
) -> T {
    let core = app_core.write().await;
    let mut state = core.views().bookmarks();
    let output = update(&mut state);
    core.views().set_bookmarks(state);
    output
}

/// Read-modify-write helper for the search box.
pub async fn with_search<T>(
    app_core: &Arc<RwLock<AppCore>>,
    update: impl FnOnce(&mut SearchState) -> T,
) -> T {
    let core = app_core.write().await;
    let mut state = core.views().search();
    let output = update(&mut state);
    core.views().set_search(state);
    output
}

/// Read-modify-write helper for the toast queue.
pub async fn with_notifications<T>(
    app_core: &Arc<RwLock<AppCore>>,
    update: impl FnOnce(&mut NotificationsState) -> T,
) -> T {
    let core = app_core.write().await;
    let mut state = core.views().notifications();
    let output = update(&mut state);
    core.views().set_notifications(state);
    output
}

/// Read-modify-write helper for the sign-in prompt.
pub async fn with_login_prompt<T>(
    app_core: &Arc<RwLock<AppCore>>,
    update: impl FnOnce(&mut LoginPrompt) -> T,
) -> T {
    let core = app_core.write().await;
    let mut state = core.views().login_prompt();
    let output = update(&mut state);
    core.views().set_login_prompt(state);
    output
}

/// Queue a toast with the configured display duration.
pub async fn push_toast(app_core: &Arc<RwLock<AppCore>>, toast: Toast) {
    let core = app_core.write().await;
    let toast = toast.with_duration(core.config().toast_duration_ms);
    let mut state = core.views().notifications();
    state.push(toast);
    core.views().set_notifications(state);
}

/// Queue an error toast describing a failed `action`.
pub async fn push_error_toast(app_core: &Arc<RwLock<AppCore>>, action: &str, err: &ChirpError) {
    let app_error = AppError::from_chirp(action, err);
    let toast = Toast::new(app_error.toast_level(), app_error.user_message());
    push_toast(app_core, toast).await;
}
