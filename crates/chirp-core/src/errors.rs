//! Unified error type for Chirp operations
//!
//! Every fallible call in the client core returns [`ChirpError`]. Remote
//! failures are folded into the `Network` and `Backend` variants so the
//! application layer can decide whether to revert optimistic state.

use serde::{Deserialize, Serialize};

/// Unified error type for all Chirp operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ChirpError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Document not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// The backend refused the request
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Error message describing the permission issue
        message: String,
    },

    /// Transport failure between client and backend
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// The backend accepted the request but failed to apply it
    #[error("Backend error: {message}")]
    Backend {
        /// Error message reported by the backend
        message: String,
    },

    /// A toggle for the same target is still waiting on the backend
    #[error("Interaction in flight: {message}")]
    InFlight {
        /// Which interaction is still pending
        message: String,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl ChirpError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create an in-flight error
    pub fn in_flight(message: impl Into<String>) -> Self {
        Self::InFlight {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the failure came from the remote side (as opposed to local state).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Backend { .. } | Self::PermissionDenied { .. }
        )
    }
}

/// Standard Result type for Chirp operations
pub type Result<T> = std::result::Result<T, ChirpError>;

impl From<serde_json::Error> for ChirpError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid(err.to_string())
    }
}

impl From<std::io::Error> for ChirpError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ChirpError::invalid("test message");
        assert!(matches!(err, ChirpError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ChirpError::from(io_err);
        assert!(matches!(err, ChirpError::NotFound { .. }));
    }

    #[test]
    fn test_remote_classification() {
        assert!(ChirpError::network("offline").is_remote());
        assert!(ChirpError::backend("write rejected").is_remote());
        assert!(!ChirpError::in_flight("like").is_remote());
        assert!(!ChirpError::invalid("bad").is_remote());
    }
}
