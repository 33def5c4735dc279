//! Application configuration
//!
//! Defaults match the behaviour of the hosted client. A config can be read
//! from TOML, then overlaid with `CHIRP_*` environment variables, then
//! validated before `AppCore` accepts it.

use chirp_core::{ChirpError, DEFAULT_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides (`CHIRP_SEARCH_DEBOUNCE_MS=300`).
pub const ENV_PREFIX: &str = "CHIRP_";

/// Debounce interval for the user search box.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Magnitude of the stats counter animation offset.
pub const DEFAULT_MOVE_OFFSET: i32 = 25;

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Toasts kept before the oldest is dropped.
pub const DEFAULT_MAX_PENDING_TOASTS: usize = 8;

/// Route of the bookmarks listing.
pub const DEFAULT_BOOKMARKS_HREF: &str = "/bookmarks";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period before a search input is sent to the backend
    pub search_debounce_ms: u64,
    /// Result cap for user search
    pub search_page_size: usize,
    /// Animation offset handed to counter renderers
    pub move_offset: i32,
    /// Toast display duration
    pub toast_duration_ms: u64,
    /// Maximum queued toasts
    pub max_pending_toasts: usize,
    /// Link target of the "added to bookmarks" toast
    pub bookmarks_href: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            search_page_size: DEFAULT_SEARCH_LIMIT,
            move_offset: DEFAULT_MOVE_OFFSET,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_pending_toasts: DEFAULT_MAX_PENDING_TOASTS,
            bookmarks_href: DEFAULT_BOOKMARKS_HREF.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ChirpError> {
        toml::from_str(content).map_err(|e| ChirpError::invalid(format!("Invalid TOML: {e}")))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ChirpError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChirpError::internal(format!("Failed to read config file: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Overlay `CHIRP_*` variables from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), ChirpError> {
        self.merge_with_vars(std::env::vars())
    }

    /// Overlay `CHIRP_*` variables from an explicit iterator.
    ///
    /// Unknown keys under the prefix are rejected so typos surface early.
    pub fn merge_with_vars(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), ChirpError> {
        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                self.set_from_string(&name.to_lowercase(), &value)?;
            }
        }
        Ok(())
    }

    /// Set a single field by name.
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<(), ChirpError> {
        match key {
            "search_debounce_ms" => self.search_debounce_ms = parse(key, value)?,
            "search_page_size" => self.search_page_size = parse(key, value)?,
            "move_offset" => self.move_offset = parse(key, value)?,
            "toast_duration_ms" => self.toast_duration_ms = parse(key, value)?,
            "max_pending_toasts" => self.max_pending_toasts = parse(key, value)?,
            "bookmarks_href" => self.bookmarks_href = value.to_string(),
            other => {
                return Err(ChirpError::invalid(format!(
                    "Unknown configuration key: {other}"
                )))
            }
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ChirpError> {
        if self.search_page_size == 0 {
            return Err(ChirpError::invalid("search_page_size must be positive"));
        }
        if self.move_offset <= 0 {
            return Err(ChirpError::invalid("move_offset must be positive"));
        }
        if self.max_pending_toasts == 0 {
            return Err(ChirpError::invalid("max_pending_toasts must be positive"));
        }
        if !self.bookmarks_href.starts_with('/') {
            return Err(ChirpError::invalid("bookmarks_href must be an absolute route"));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ChirpError> {
    value
        .trim()
        .parse()
        .map_err(|_| ChirpError::invalid(format!("Invalid value for {key}: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.search_page_size, 5);
        assert_eq!(config.move_offset, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str("search_debounce_ms = 250\n").unwrap();
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.search_page_size, 5);
    }

    #[test]
    fn test_env_overlay() {
        let mut config = AppConfig::default();
        config
            .merge_with_vars([
                ("CHIRP_SEARCH_PAGE_SIZE".to_string(), "10".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ])
            .unwrap();
        assert_eq!(config.search_page_size, 10);

        let err = config
            .merge_with_vars([("CHIRP_NOPE".to_string(), "1".to_string())])
            .unwrap_err();
        assert!(matches!(err, ChirpError::Invalid { .. }));
    }

    #[test]
    fn test_validation_rejects_zero_page() {
        let config = AppConfig {
            search_page_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
