//! Authentication Workflow
//!
//! Gating of interactive actions and the sign-in prompt lifecycle. Signing in
//! replaces the session context held by `AppCore`; nothing reads the current
//! user from anywhere else.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::{ChirpError, User, UserId};
use tracing::{debug, info, warn};

use crate::core::SessionContext;
use crate::gate::Gate;
use crate::workflows::feed::refresh_bookmarks;
use crate::workflows::runtime::require_runtime;
use crate::workflows::state_helpers::with_login_prompt;
use crate::AppCore;

/// Gate an action on the session.
///
/// When nobody is signed in the sign-in prompt is opened and
/// `Gate::SignInRequired` is returned; the caller must not touch the backend.
pub async fn gate_actor(app_core: &Arc<RwLock<AppCore>>) -> Gate<UserId> {
    let session = app_core.read().await.session();
    let gate = session.guard(UserId::clone);
    if !gate.is_open() {
        debug!("gated action blocked, opening sign-in prompt");
        with_login_prompt(app_core, |prompt| prompt.open()).await;
    }
    gate
}

/// Sign in through the backend, install the new session and load the user's
/// bookmarks.
pub async fn sign_in(app_core: &Arc<RwLock<AppCore>>) -> Result<User, ChirpError> {
    let runtime = require_runtime(app_core).await?;
    let user = runtime.sign_in().await?;

    {
        let mut core = app_core.write().await;
        core.set_session(SessionContext::signed_in(user.clone()));
        let mut prompt = core.views().login_prompt();
        prompt.close();
        core.views().set_login_prompt(prompt);
    }
    info!(user_id = %user.id, username = %user.username, "signed in");

    if let Err(err) = refresh_bookmarks(app_core).await {
        warn!(error = %err, "bookmarks unavailable after sign-in");
    }
    Ok(user)
}

/// Sign out through the backend and drop back to an anonymous session.
pub async fn sign_out(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ChirpError> {
    let runtime = require_runtime(app_core).await?;
    runtime.sign_out().await?;
    app_core.write().await.set_session(SessionContext::anonymous());
    info!("signed out");
    Ok(())
}

/// Dismiss the sign-in prompt without signing in.
pub async fn cancel_sign_in(app_core: &Arc<RwLock<AppCore>>) {
    with_login_prompt(app_core, |prompt| prompt.close()).await;
}
