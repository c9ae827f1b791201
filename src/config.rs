use crate::constants::PORTAL_BASE_URL;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Resolved client configuration with all values filled in (no Options).
///
/// This struct carries the pipeline defaults and can be deserialized by the
/// TOML loader. All fields have concrete values, making it safe to access
/// directly without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Portal base URL. Overridable so tests can point the client at a
    /// local server.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Whether to log each outbound request's target and body.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PORTAL_BASE_URL.to_string(),
            timeout_secs: 60,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Rejects unknown keys to prevent typos from being silently ignored,
    /// and validates that timeout_secs is positive and base_url non-empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or a value fails validation.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Timeout must be greater than 0 seconds".into(),
            ));
        }
        if config.base_url.trim().is_empty() {
            return Err(AppError::InvalidInput("Base URL must not be empty".into()));
        }

        Ok(config)
    }
}
