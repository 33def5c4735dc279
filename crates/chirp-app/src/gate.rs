//! Action gate for interactions that need a signed-in actor.
//!
//! The gate is a pure branch: either the action runs, or the caller opens the
//! sign-in prompt instead. Nothing is retried and nothing is thrown.

/// Result of gating an action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Gate<A> {
    /// The user is signed in; holds whatever the action produced.
    Open(A),
    /// The user is anonymous; the action was not invoked.
    SignInRequired,
}

impl<A> Gate<A> {
    /// Whether the action ran.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The action's output, if it ran.
    pub fn into_open(self) -> Option<A> {
        match self {
            Self::Open(value) => Some(value),
            Self::SignInRequired => None,
        }
    }

    /// Transform the action's output.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Gate<B> {
        match self {
            Self::Open(value) => Gate::Open(f(value)),
            Self::SignInRequired => Gate::SignInRequired,
        }
    }
}

/// Invoke `action` only when authenticated.
pub fn guard<A>(is_authenticated: bool, action: impl FnOnce() -> A) -> Gate<A> {
    if is_authenticated {
        Gate::Open(action())
    } else {
        Gate::SignInRequired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_anonymous_action_is_not_invoked() {
        let calls = Cell::new(0);
        let gate = guard(false, || calls.set(calls.get() + 1));
        assert_eq!(gate, Gate::SignInRequired);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_authenticated_action_is_delegated() {
        let calls = Cell::new(0);
        let gate = guard(true, || {
            calls.set(calls.get() + 1);
            "liked"
        });
        assert!(gate.is_open());
        assert_eq!(gate.map(str::len).into_open(), Some(5));
        assert_eq!(calls.get(), 1);
    }
}
