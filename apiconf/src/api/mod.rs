//! HTTP API module.
//!
//! Serves the resolved configuration to frontends that fetch it at runtime.

pub mod server;
pub mod types;

pub use server::{router, start_server, AppState};
pub use types::*;
