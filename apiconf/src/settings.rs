//! Resolved application settings.
//!
//! [`AppConfig`] is built once from the environment indicator and a
//! [`ConfigTable`], then handed to whoever needs it. For code that cannot
//! take it as a parameter, [`api_base_url`] exposes a process-wide value
//! computed on first use and stable afterwards.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::environment::{environment_from_process, resolve_environment, Environment, ENV_VAR};
use crate::error::ConfigResult;
use crate::table::ConfigTable;

/// Process-wide configuration, resolved from `APP_ENV` and the builtin table.
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Configuration for the active environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Environment the values were selected for
    pub environment: Environment,
    /// Base URL for API requests
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolve an indicator against a table.
    ///
    /// Absent or empty indicators select `development`. Unknown tags fail
    /// here rather than surfacing later as a missing URL.
    pub fn resolve(indicator: Option<&str>, table: &ConfigTable) -> ConfigResult<Self> {
        let tag = resolve_environment(indicator);
        let environment = tag.parse::<Environment>().map_err(|e| {
            log::warn!("Rejected {} value '{}'", ENV_VAR, tag);
            e
        })?;
        let entry = table.get(environment)?;

        log::debug!("Resolved environment '{}' -> {}", environment, entry.api_url);

        Ok(Self {
            environment,
            api_base_url: entry.api_url.clone(),
        })
    }

    /// Resolve from `APP_ENV` and the builtin table.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_with(&ConfigTable::builtin())
    }

    /// Resolve from `APP_ENV` against a custom table.
    pub fn from_env_with(table: &ConfigTable) -> ConfigResult<Self> {
        let tag = environment_from_process();
        Self::resolve(Some(&tag), table)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Initialize the process-wide configuration.
///
/// The first successful call fixes the value for the rest of the process.
/// A failed call leaves nothing behind, so a later call retries.
pub fn init() -> ConfigResult<&'static AppConfig> {
    CONFIG.get_or_try_init(AppConfig::from_env)
}

/// The process-wide configuration, if already initialized.
pub fn get() -> Option<&'static AppConfig> {
    CONFIG.get()
}

/// Base URL for API requests in the active environment.
pub fn api_base_url() -> ConfigResult<&'static str> {
    init().map(|config| config.api_base_url.as_str())
}
