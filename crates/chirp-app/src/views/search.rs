//! # User Search View State
//!
//! Two counters keep the debounced search honest:
//!
//! - `input_generation` bumps on every keystroke. A debounced task only
//!   issues its query if its generation is still the latest when the quiet
//!   period ends.
//! - `issued_seq` bumps on every issued query. A response is applied only if
//!   its sequence number is still the latest issued, so a slow older query can
//!   never overwrite a newer result.

use chirp_core::{ChirpError, User};
use serde::{Deserialize, Serialize};

/// Placeholder while a query is running.
pub const SEARCHING_PLACEHOLDER: &str = "Searching...";

/// Placeholder for an empty result list.
pub const NO_RESULTS_PLACEHOLDER: &str = "No user found";

/// Where the search box currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// Nothing issued yet
    #[default]
    Idle,
    /// Query `seq` is running
    Searching {
        /// Sequence number of the running query
        seq: u64,
    },
    /// Latest query returned these users
    Results(Vec<User>),
    /// Latest query failed
    Failed {
        /// Failure description
        message: String,
    },
}

/// Search box state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    input: String,
    input_generation: u64,
    issued_seq: u64,
    status: SearchStatus,
}

impl SearchState {
    /// Raw input as typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current status.
    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Latest input generation.
    pub fn input_generation(&self) -> u64 {
        self.input_generation
    }

    /// Latest issued query sequence number.
    pub fn issued_seq(&self) -> u64 {
        self.issued_seq
    }

    /// Record a keystroke; returns its generation.
    pub fn begin_input(&mut self, input: &str) -> u64 {
        self.input = input.to_string();
        self.input_generation += 1;
        self.input_generation
    }

    /// Whether `generation` is still the latest input.
    pub fn is_current_input(&self, generation: u64) -> bool {
        self.input_generation == generation
    }

    /// Mark a query as issued; returns its sequence number.
    pub fn begin_query(&mut self) -> u64 {
        self.issued_seq += 1;
        self.status = SearchStatus::Searching {
            seq: self.issued_seq,
        };
        self.issued_seq
    }

    /// Apply the response of query `seq`. Returns `false` (and changes
    /// nothing) when a newer query has been issued since.
    pub fn complete(&mut self, seq: u64, result: Result<Vec<User>, ChirpError>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.status = match result {
            Ok(users) => SearchStatus::Results(users),
            Err(err) => SearchStatus::Failed {
                message: err.to_string(),
            },
        };
        true
    }

    /// Users to list.
    pub fn results(&self) -> &[User] {
        match &self.status {
            SearchStatus::Results(users) => users,
            _ => &[],
        }
    }

    /// Whether a query is running.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Searching { .. })
    }

    /// Text to show instead of a list, if any.
    ///
    /// A failed query renders like an empty one; callers that care can match
    /// on [`SearchStatus::Failed`].
    pub fn placeholder(&self) -> Option<&'static str> {
        match &self.status {
            SearchStatus::Idle => None,
            SearchStatus::Searching { .. } => Some(SEARCHING_PLACEHOLDER),
            SearchStatus::Results(users) if users.is_empty() => Some(NO_RESULTS_PLACEHOLDER),
            SearchStatus::Results(_) => None,
            SearchStatus::Failed { .. } => Some(NO_RESULTS_PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_input() {
        let mut state = SearchState::default();
        let first = state.begin_input("al");
        let second = state.begin_input("ali");
        assert!(!state.is_current_input(first));
        assert!(state.is_current_input(second));
        assert_eq!(state.input(), "ali");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchState::default();
        let old = state.begin_query();
        let new = state.begin_query();

        assert!(state.complete(new, Ok(vec![User::new("u1", "alice")])));
        assert!(!state.complete(old, Ok(vec![])));
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.placeholder(), None);
    }

    #[test]
    fn test_placeholders() {
        let mut state = SearchState::default();
        let seq = state.begin_query();
        assert_eq!(state.placeholder(), Some("Searching..."));
        assert!(state.is_loading());

        state.complete(seq, Ok(vec![]));
        assert_eq!(state.placeholder(), Some("No user found"));

        let seq = state.begin_query();
        state.complete(seq, Err(ChirpError::network("offline")));
        assert_eq!(state.placeholder(), Some("No user found"));
        assert!(matches!(state.status(), SearchStatus::Failed { .. }));
    }
}
