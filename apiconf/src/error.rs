//! Error types for environment and API URL resolution.
//!
//! - [`ConfigError`] - table loading and lookup errors
//! - [`ServerError`] - errors from the HTTP config endpoint
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

use crate::environment::Environment;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building or reading the configuration table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resolved environment tag is not part of the known set.
    #[error("Unknown environment '{tag}' (expected one of: {known})")]
    UnknownEnvironment { tag: String, known: String },

    /// A known environment has no entry in the table.
    #[error("No configuration entry for environment '{0}'")]
    MissingEntry(Environment),

    /// An entry exists but its API URL is blank.
    #[error("Empty API_URL for environment '{0}'")]
    EmptyUrl(Environment),

    /// Failed to read a table file.
    #[error("Failed to read config table: {0}")]
    Io(#[from] std::io::Error),

    /// Table file is not valid JSON or has the wrong shape.
    #[error("Invalid config table: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Build a [`ConfigError::UnknownEnvironment`] listing every known tag.
    pub fn unknown_environment(tag: impl Into<String>) -> Self {
        let known = Environment::ALL
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        ConfigError::UnknownEnvironment {
            tag: tag.into(),
            known,
        }
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be resolved at startup.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_environment_lists_known_tags() {
        let err = ConfigError::unknown_environment("staging");
        let msg = err.to_string();
        assert!(msg.contains("staging"));
        assert!(msg.contains("development, production"));
    }

    #[test]
    fn test_error_conversion_chain() {
        let config_err = ConfigError::MissingEntry(Environment::Production);
        let server_err: ServerError = config_err.into();
        assert!(server_err.to_string().contains("production"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let config_err: ConfigError = json_err.into();
        assert!(config_err.to_string().starts_with("Invalid config table"));
    }
}
