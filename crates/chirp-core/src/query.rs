//! User search range query
//!
//! The users collection is searched by username prefix using a lexicographic
//! range: `start_at(prefix)` .. `end_at(prefix + U+F8FF)`. U+F8FF sorts after
//! almost every printable code point, so the range covers every username that
//! begins with the prefix.

use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Upper sentinel appended to the prefix to close the range.
pub const PREFIX_RANGE_SENTINEL: char = '\u{f8ff}';

/// Default page size for user search.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Range query over the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    /// Username prefix (may be empty, which matches every user)
    pub prefix: String,
    /// Username excluded from results (the signed-in user)
    pub exclude_username: Option<String>,
    /// Maximum number of results
    pub limit: usize,
}

impl UserQuery {
    /// Prefix query with the default page size.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            exclude_username: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Exclude a username from the results.
    #[must_use]
    pub fn excluding(mut self, username: impl Into<String>) -> Self {
        self.exclude_username = Some(username.into());
        self
    }

    /// Override the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Inclusive lower bound.
    pub fn start_at(&self) -> &str {
        &self.prefix
    }

    /// Inclusive upper bound.
    pub fn end_at(&self) -> String {
        let mut end = self.prefix.clone();
        end.push(PREFIX_RANGE_SENTINEL);
        end
    }

    /// Whether a username falls inside the range and is not excluded.
    pub fn matches(&self, username: &str) -> bool {
        if self.exclude_username.as_deref() == Some(username) {
            return false;
        }
        username >= self.start_at() && username <= self.end_at().as_str()
    }

    /// Evaluate the query against an in-memory collection: filter, order by
    /// username, cap at `limit`.
    pub fn evaluate<'a>(&self, users: impl IntoIterator<Item = &'a User>) -> Vec<User> {
        let mut hits: Vec<&User> = users
            .into_iter()
            .filter(|u| self.matches(&u.username))
            .collect();
        hits.sort_by(|a, b| a.username.cmp(&b.username));
        hits.into_iter().take(self.limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        ["alice", "alina", "ali", "bob", "alfred", "alicia", "al"]
            .iter()
            .enumerate()
            .map(|(i, name)| User::new(format!("u{i}"), *name))
            .collect()
    }

    #[test]
    fn test_bounds() {
        let q = UserQuery::prefix("ali");
        assert_eq!(q.start_at(), "ali");
        assert_eq!(q.end_at(), "ali\u{f8ff}");
        assert!(q.matches("ali"));
        assert!(q.matches("alicia"));
        assert!(!q.matches("al"));
        assert!(!q.matches("bob"));
    }

    #[test]
    fn test_evaluate_orders_excludes_and_limits() {
        let users = users();
        let q = UserQuery::prefix("al").excluding("alice").with_limit(3);
        let names: Vec<_> = q.evaluate(&users).into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["al", "alfred", "ali"]);
    }

    #[test]
    fn test_empty_prefix_matches_everyone() {
        let users = users();
        let q = UserQuery::prefix("");
        assert_eq!(q.evaluate(&users).len(), DEFAULT_SEARCH_LIMIT);
    }
}
