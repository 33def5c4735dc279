//! Categorized application errors
//!
//! Provides structured error types that enable:
//! - Categorized error handling (network vs backend vs local state)
//! - Appropriate toast severity routing
//! - Recovery hints for user-actionable errors

use std::fmt;

use chirp_core::ChirpError;

pub use crate::views::notifications::ToastLevel;

// ============================================================================
// Error Categories
// ============================================================================

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User input validation errors (correctable by user)
    Input,
    /// Authorization errors reported by the backend
    Permission,
    /// Document not found
    NotFound,
    /// Network connectivity errors (often transient)
    Network,
    /// A previous action on the same target is still running
    Busy,
    /// General operation failures (catch-all)
    Operation,
}

impl ErrorCategory {
    /// Check if this error category is likely transient.
    ///
    /// Transient errors may resolve on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Busy)
    }

    /// Get the appropriate toast severity for this category.
    #[must_use]
    pub fn toast_severity(&self) -> ToastLevel {
        match self {
            Self::Input => ToastLevel::Info,
            Self::Permission => ToastLevel::Error,
            Self::NotFound => ToastLevel::Warning,
            Self::Network => ToastLevel::Warning,
            Self::Busy => ToastLevel::Info,
            Self::Operation => ToastLevel::Error,
        }
    }

    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Permission => "Permission",
            Self::NotFound => "Not Found",
            Self::Network => "Network",
            Self::Busy => "Busy",
            Self::Operation => "Operation",
        }
    }

    /// Get a hint for the user on how to resolve this category of error.
    #[must_use]
    pub fn resolution_hint(&self) -> &'static str {
        match self {
            Self::Input => "Check your input and try again",
            Self::Permission => "You are not allowed to do that",
            Self::NotFound => "This Tweet is no longer available",
            Self::Network => "Check your network connection and retry",
            Self::Busy => "Wait for the previous action to finish",
            Self::Operation => "Something went wrong, try again",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categorized application error, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppError {
    category: ErrorCategory,
    action: String,
    detail: String,
}

impl AppError {
    /// Wrap a core error raised while performing `action`.
    pub fn from_chirp(action: impl Into<String>, err: &ChirpError) -> Self {
        let category = match err {
            ChirpError::Invalid { .. } => ErrorCategory::Input,
            ChirpError::NotFound { .. } => ErrorCategory::NotFound,
            ChirpError::PermissionDenied { .. } => ErrorCategory::Permission,
            ChirpError::Network { .. } => ErrorCategory::Network,
            ChirpError::InFlight { .. } => ErrorCategory::Busy,
            ChirpError::Backend { .. } | ChirpError::Internal { .. } => ErrorCategory::Operation,
        };
        Self {
            category,
            action: action.into(),
            detail: err.to_string(),
        }
    }

    /// Error category
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Get the appropriate toast severity for this error
    pub fn toast_level(&self) -> ToastLevel {
        self.category.toast_severity()
    }

    /// Short user-facing message
    pub fn user_message(&self) -> String {
        format!("Could not {}. {}", self.action, self.category.resolution_hint())
    }

    /// Get a short error code string
    pub fn code(&self) -> &'static str {
        match self.category {
            ErrorCategory::Input => "INPUT",
            ErrorCategory::Permission => "PERMISSION",
            ErrorCategory::NotFound => "NOT_FOUND",
            ErrorCategory::Network => "NETWORK",
            ErrorCategory::Busy => "BUSY",
            ErrorCategory::Operation => "OPERATION",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed ({}): {}", self.action, self.category, self.detail)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_routes_to_warning() {
        let err = AppError::from_chirp("like this Tweet", &ChirpError::network("timeout"));
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.toast_level(), ToastLevel::Warning);
        assert_eq!(err.code(), "NETWORK");
        assert_eq!(
            err.to_string(),
            "like this Tweet failed (Network): Network error: timeout"
        );
        assert_eq!(
            err.user_message(),
            "Could not like this Tweet. Check your network connection and retry"
        );
    }

    #[test]
    fn test_backend_failure_is_an_error_toast() {
        let err = AppError::from_chirp("retweet", &ChirpError::backend("write rejected"));
        assert_eq!(err.category(), ErrorCategory::Operation);
        assert_eq!(err.toast_level(), ToastLevel::Error);
        assert!(!err.category().is_transient());
    }

    #[test]
    fn test_in_flight_is_transient() {
        let err = AppError::from_chirp("bookmark", &ChirpError::in_flight("bookmark t1"));
        assert!(err.category().is_transient());
        assert_eq!(err.toast_level(), ToastLevel::Info);
    }

    #[test]
    fn test_resolution_hints_non_empty() {
        for category in [
            ErrorCategory::Input,
            ErrorCategory::Permission,
            ErrorCategory::NotFound,
            ErrorCategory::Network,
            ErrorCategory::Busy,
            ErrorCategory::Operation,
        ] {
            assert!(!category.resolution_hint().is_empty());
        }
    }
}
