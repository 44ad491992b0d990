//! # apiconf - API base URL per deployment environment
//!
//! Picks the API base URL for the running process from the `APP_ENV`
//! environment variable.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   APP_ENV   │────▶│  Resolver   │────▶│ ConfigTable │────▶│  AppConfig  │
//! │ (optional)  │     │ (default:   │     │   lookup    │     │ api_base_url│
//! │             │     │ development)│     │             │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apiconf::{AppConfig, ConfigTable};
//!
//! // Resolve once at startup and pass it around
//! let config = AppConfig::from_env().unwrap();
//! println!("API at {}", config.api_base_url);
//!
//! // Or use the process-wide value
//! let url = apiconf::api_base_url().unwrap();
//! assert_eq!(url, config.api_base_url);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`environment`] - Environment tags and resolver
//! - [`table`] - Config table and lookup
//! - [`settings`] - Resolved configuration
//! - [`api`] - HTTP config endpoint

// Core modules
pub mod error;
pub mod environment;
pub mod table;
pub mod settings;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, ServerError, ServerResult};

pub use environment::{
    environment_from_process,
    resolve_environment,
    Environment,
    DEFAULT_ENVIRONMENT,
    ENV_VAR,
};

pub use table::{ConfigTable, EnvironmentConfig, DEFAULT_API_URL};

pub use settings::{api_base_url, AppConfig};

// Server
pub mod server {
    pub use crate::api::server::{start_server, AppState};
}
