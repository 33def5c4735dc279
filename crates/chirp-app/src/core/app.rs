//! # AppCore
//!
//! Owns the configuration, the session context, the optional runtime bridge
//! and the reactive views. Frontends hold it as `Arc<RwLock<AppCore>>` and
//! drive it through `crate::workflows`.

use std::sync::Arc;

use chirp_core::ChirpError;

use super::config::AppConfig;
use super::session::SessionContext;
use crate::runtime_bridge::BoxedRuntimeBridge;
use crate::views::{StateSnapshot, ViewState};

/// Headless application core.
pub struct AppCore {
    config: AppConfig,
    session: Arc<SessionContext>,
    runtime: Option<BoxedRuntimeBridge>,
    views: ViewState,
}

impl std::fmt::Debug for AppCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCore")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("has_runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}

impl AppCore {
    /// Create a core without a runtime. The config is validated first.
    pub fn new(config: AppConfig) -> Result<Self, ChirpError> {
        config.validate()?;
        let views = ViewState::with_toast_capacity(config.max_pending_toasts);
        Ok(Self {
            config,
            session: Arc::new(SessionContext::anonymous()),
            runtime: None,
            views,
        })
    }

    /// Create a core wired to `runtime`.
    pub fn with_runtime(config: AppConfig, runtime: BoxedRuntimeBridge) -> Result<Self, ChirpError> {
        let mut core = Self::new(config)?;
        core.runtime = Some(runtime);
        Ok(core)
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current session context.
    pub fn session(&self) -> Arc<SessionContext> {
        Arc::clone(&self.session)
    }

    /// Replace the session context.
    ///
    /// Every mounted card re-derives its memberships for the new actor, and
    /// the bookmarks view is cleared; the caller fetches the new user's
    /// bookmarks afterwards.
    pub fn set_session(&mut self, session: SessionContext) {
        let session = Arc::new(session);
        let actor = session.actor_id().cloned();

        let mut tweets = self.views.tweets();
        tweets.for_each_mut(|card| {
            card.set_actor(actor.as_ref());
        });
        self.views.set_tweets(tweets);

        let mut bookmarks = self.views.bookmarks();
        bookmarks.clear();
        self.views.set_bookmarks(bookmarks);

        self.session = session;
    }

    /// Runtime bridge, if attached.
    pub fn runtime(&self) -> Option<&BoxedRuntimeBridge> {
        self.runtime.as_ref()
    }

    /// Reactive views.
    pub fn views(&self) -> &ViewState {
        &self.views
    }

    /// Plain copy of every view.
    pub fn snapshot(&self) -> StateSnapshot {
        self.views.snapshot()
    }
}
