//! A failed process-wide init leaves nothing cached.
//!
//! Own test binary: the process-wide config must start uninitialized.

use apiconf::{api_base_url, settings, ConfigError, Environment, ENV_VAR};
use std::env;

#[test]
fn test_failed_init_is_retried() {
    env::set_var(ENV_VAR, "staging");
    let err = settings::init().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownEnvironment { ref tag, .. } if tag == "staging"));
    assert!(settings::get().is_none());

    env::set_var(ENV_VAR, "production");
    assert_eq!(api_base_url().unwrap(), "http://localhost:5000/api");
    assert_eq!(settings::get().unwrap().environment, Environment::Production);

    env::remove_var(ENV_VAR);
}
