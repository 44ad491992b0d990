//! Resolution from the real process environment.
//!
//! Kept in its own test binary because it mutates `APP_ENV`.

use apiconf::{environment_from_process, AppConfig, ConfigError, ConfigTable, Environment, ENV_VAR};
use std::env;

#[test]
fn test_resolution_follows_app_env() {
    env::remove_var(ENV_VAR);
    assert_eq!(environment_from_process(), "development");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_base_url, "http://localhost:5000/api");

    env::set_var(ENV_VAR, "");
    assert_eq!(environment_from_process(), "development");

    // Custom tables go through the same resolver
    let table = ConfigTable::from_json(
        r#"{"development": {"API_URL": "http://dev"}, "production": {"API_URL": "https://prod"}}"#,
    )
    .unwrap();
    let config = AppConfig::from_env_with(&table).unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_base_url, "http://dev");

    env::set_var(ENV_VAR, "production");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.api_base_url, "http://localhost:5000/api");

    env::set_var(ENV_VAR, "staging");
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownEnvironment { ref tag, .. } if tag == "staging"));

    env::remove_var(ENV_VAR);
}
