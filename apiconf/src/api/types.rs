//! REST API types for the config endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::environment::Environment;
use crate::table::EnvironmentConfig;

/// Response for a single table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentResponse {
    pub environment: Environment,
    pub api_url: String,
}

impl EnvironmentResponse {
    pub fn new(environment: Environment, entry: &EnvironmentConfig) -> Self {
        Self {
            environment,
            api_url: entry.api_url.clone(),
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}
