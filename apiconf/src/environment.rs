//! Environment tags and the environment resolver.
//!
//! The active environment comes from the `APP_ENV` process variable.
//! When it is unset or empty the resolver falls back to `development`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Process variable holding the environment tag.
pub const ENV_VAR: &str = "APP_ENV";

/// Tag used when [`ENV_VAR`] is absent or empty.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Deployment environment selecting a configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Every known environment, in declaration order.
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    /// The tag as it appears in `APP_ENV` and in table files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|e| e.as_str() == tag)
            .ok_or_else(|| ConfigError::unknown_environment(tag))
    }
}

/// Resolve an environment indicator to a tag.
///
/// Absent and empty indicators both resolve to [`DEFAULT_ENVIRONMENT`].
/// Any other value is returned as-is; checking it against the known set
/// is the table lookup's job.
pub fn resolve_environment(indicator: Option<&str>) -> String {
    match indicator {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => {
            log::debug!("{} not set, defaulting to '{}'", ENV_VAR, DEFAULT_ENVIRONMENT);
            DEFAULT_ENVIRONMENT.to_string()
        }
    }
}

/// Read [`ENV_VAR`] from the process environment and resolve it.
///
/// A value that is not valid unicode counts as absent.
pub fn environment_from_process() -> String {
    let indicator = env::var(ENV_VAR).ok();
    resolve_environment(indicator.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_indicator_defaults_to_development() {
        assert_eq!(resolve_environment(None), "development");
    }

    #[test]
    fn test_empty_indicator_defaults_to_development() {
        assert_eq!(resolve_environment(Some("")), "development");
    }

    #[test]
    fn test_indicator_passes_through() {
        assert_eq!(resolve_environment(Some("production")), "production");
        // Unknown tags are not rejected here
        assert_eq!(resolve_environment(Some("staging")), "staging");
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Production".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment { ref tag, .. } if tag == "Production"));
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:<12}]", Environment::Production), "[production  ]");
    }

    #[test]
    fn test_display_matches_serde() {
        for env in Environment::ALL {
            let json = serde_json::to_string(&env).unwrap();
            assert_eq!(json, format!("\"{}\"", env));
        }
    }
}
