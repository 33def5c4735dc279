//! Read-only session context.
//!
//! The current actor is never ambient: `AppCore` owns one `Arc<SessionContext>`
//! and workflows read it explicitly. Signing in or out replaces the whole
//! context.

use chirp_core::{User, UserId};
use serde::{Deserialize, Serialize};

use crate::gate::{guard, Gate};

/// Who is using the client right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    /// No one is signed in.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// `user` is signed in.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Signed-in user document.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Actor id of the signed-in user.
    pub fn actor_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }

    /// Username of the signed-in user.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Gate `action` on authentication, handing it the actor id.
    pub fn guard<A>(&self, action: impl FnOnce(&UserId) -> A) -> Gate<A> {
        match self.actor_id() {
            Some(actor) => guard(true, || action(actor)),
            None => Gate::SignInRequired,
        }
    }
}
