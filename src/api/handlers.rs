//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::config::Config;
use crate::utils::now_timestamp;

/// Status reported by the health endpoint.
pub const HEALTHY: &str = "healthy";

/// Greeting returned by the welcome endpoint.
pub const WELCOME_MESSAGE: &str = "Hello from Tekton CI/CD Pipeline!";

/// Service name returned by the info endpoint.
pub const SERVICE_NAME: &str = "sample-app";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration resolved at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// Time the response was built.
    pub timestamp: String,
    /// Application version.
    pub version: String,
}

/// Welcome response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub environment: String,
    pub pod_name: String,
}

/// Build information response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: String,
    pub build_time: String,
    pub commit_hash: String,
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        timestamp: now_timestamp(),
        version: state.config.app_version.clone(),
    })
}

/// Welcome handler.
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        environment: state.config.node_env.clone(),
        pod_name: state.config.pod_name.clone(),
    })
}

/// Build info handler.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = &state.config;
    Json(InfoResponse {
        service: SERVICE_NAME,
        version: config.app_version.clone(),
        build_time: config.build_time.clone(),
        commit_hash: config.commit_hash.clone(),
    })
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
