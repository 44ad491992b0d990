//! HTTP server exposing the resolved configuration.
//!
//! # API Endpoints
//!
//! | Method | Path                        | Description                       |
//! |--------|-----------------------------|-----------------------------------|
//! | GET    | `/health`                   | Health check                      |
//! | GET    | `/api/config`               | Config for the active environment |
//! | GET    | `/api/config/{environment}` | Table entry for one environment   |

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

use super::types::{error_response, EnvironmentResponse};
use crate::environment::{environment_from_process, Environment};
use crate::error::ServerResult;
use crate::settings::AppConfig;
use crate::table::ConfigTable;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub table: ConfigTable,
}

impl AppState {
    pub fn new(config: AppConfig, table: ConfigTable) -> Self {
        Self { config, table }
    }

    /// Resolve the active config against `table` before serving it.
    pub fn resolve(indicator: Option<&str>, table: ConfigTable) -> ServerResult<Self> {
        let config = AppConfig::resolve(indicator, &table)?;
        Ok(Self::new(config, table))
    }
}

/// Build the router with CORS open to any origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/config", get(current_config))
        .route("/api/config/{environment}", get(environment_config))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Start the HTTP server for the environment named by `APP_ENV`
pub async fn start_server(port: u16, table: ConfigTable) -> ServerResult<()> {
    let tag = environment_from_process();
    let state = AppState::resolve(Some(&tag), table)?;
    let environment = state.config.environment;
    let api_base_url = state.config.api_base_url.clone();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 apiconf server running on http://localhost:{}", port);
    println!("   GET /api/config               - Active config");
    println!("   GET /api/config/{{environment}} - Config for one environment");
    println!("   GET /health                   - Health check");
    println!();
    println!("🌍 Environment: {} -> {}", environment, api_base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "apiconf",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Config resolved for the running process
async fn current_config(State(state): State<Arc<AppState>>) -> Json<AppConfig> {
    Json(state.config.clone())
}

/// Table entry for the requested environment
async fn environment_config(
    State(state): State<Arc<AppState>>,
    Path(environment): Path<String>,
) -> Result<Json<EnvironmentResponse>, (StatusCode, Json<Value>)> {
    let env = environment
        .parse::<Environment>()
        .map_err(|e| (StatusCode::NOT_FOUND, Json(error_response(&e.to_string()))))?;

    let entry = state.table.get(env).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response(&e.to_string())))
    })?;

    Ok(Json(EnvironmentResponse::new(env, entry)))
}
