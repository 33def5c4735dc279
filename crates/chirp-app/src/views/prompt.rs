//! Sign-in prompt shown when an anonymous user triggers a gated action.

use serde::{Deserialize, Serialize};

/// Prompt title
pub const SIGN_IN_TITLE: &str = "Sign in required";

/// Prompt body
pub const SIGN_IN_DESCRIPTION: &str = "You need to be signed in to perform this action";

/// Primary button
pub const SIGN_IN_LABEL: &str = "Sign in with Google";

/// Secondary button
pub const CANCEL_LABEL: &str = "Cancel";

/// Open/closed state of the sign-in prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPrompt {
    open: bool,
    /// Number of times a gated action was blocked since startup
    blocked_actions: u32,
}

impl LoginPrompt {
    /// Whether the prompt is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Gated actions blocked so far.
    pub fn blocked_actions(&self) -> u32 {
        self.blocked_actions
    }

    /// Show the prompt on behalf of a blocked action.
    pub fn open(&mut self) {
        self.open = true;
        self.blocked_actions = self.blocked_actions.saturating_add(1);
    }

    /// Hide the prompt.
    pub fn close(&mut self) {
        self.open = false;
    }
}
