//! Config table - the fixed mapping from environment to settings.
//!
//! The builtin table mirrors what the frontend ships with. A table with the
//! same shape can also be loaded from a JSON file:
//!
//! ```json
//! {
//!   "development": { "API_URL": "http://localhost:5000/api" },
//!   "production":  { "API_URL": "http://localhost:5000/api" }
//! }
//! ```
//!
//! Once built, a table is never mutated.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::environment::Environment;
use crate::error::{ConfigError, ConfigResult};

/// API URL used by both builtin profiles.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Settings record for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Base URL every API request is issued against.
    #[serde(rename = "API_URL", alias = "apiUrl")]
    pub api_url: String,
}

impl EnvironmentConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self { api_url: api_url.into() }
    }
}

/// Immutable mapping from [`Environment`] to [`EnvironmentConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigTable {
    entries: BTreeMap<Environment, EnvironmentConfig>,
}

impl ConfigTable {
    /// The table compiled into the crate.
    ///
    /// Development and production point at the same URL.
    pub fn builtin() -> Self {
        let entries = Environment::ALL
            .into_iter()
            .map(|env| (env, EnvironmentConfig::new(DEFAULT_API_URL)))
            .collect();
        Self { entries }
    }

    /// Parse a table from JSON.
    ///
    /// Unknown environment keys, repeated environment keys and unknown record
    /// fields are rejected, and every known environment must have an entry.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let UniqueEntries(entries) = serde_json::from_str(content)?;
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::from_json(&content)?;
        log::info!("Loaded config table from {}", path.display());
        Ok(table)
    }

    /// Check that every known environment has a non-empty API URL.
    pub fn validate(&self) -> ConfigResult<()> {
        for env in Environment::ALL {
            let entry = self.get(env)?;
            if entry.api_url.trim().is_empty() {
                return Err(ConfigError::EmptyUrl(env));
            }
        }
        Ok(())
    }

    /// Entry for a known environment.
    pub fn get(&self, env: Environment) -> ConfigResult<&EnvironmentConfig> {
        self.entries.get(&env).ok_or(ConfigError::MissingEntry(env))
    }

    /// Entry for a raw environment tag.
    ///
    /// Tags outside the known set fail with
    /// [`ConfigError::UnknownEnvironment`] instead of yielding nothing.
    pub fn lookup(&self, tag: &str) -> ConfigResult<&EnvironmentConfig> {
        let env = tag.parse::<Environment>().map_err(|e| {
            log::warn!("Rejected environment tag '{}'", tag);
            e
        })?;
        self.get(env)
    }

    /// All entries, in environment declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Environment, &EnvironmentConfig)> {
        self.entries.iter().map(|(env, cfg)| (*env, cfg))
    }
}

/// Table entries that fail to deserialize when an environment appears twice.
struct UniqueEntries(BTreeMap<Environment, EnvironmentConfig>);

impl<'de> Deserialize<'de> for UniqueEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = UniqueEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from environment to its settings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((env, config)) = map.next_entry::<Environment, EnvironmentConfig>()? {
                    if entries.insert(env, config).is_some() {
                        return Err(de::Error::custom(format!(
                            "duplicate entry for environment '{}'",
                            env
                        )));
                    }
                }
                Ok(UniqueEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Default for ConfigTable {
    fn default() -> Self {
        Self::builtin()
    }
}
