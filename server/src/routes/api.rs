use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Runtime settings the browser client reads at boot.
#[derive(Debug, Serialize)]
pub struct RuntimeConfig {
    pub api_base_url: String,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn runtime_config(State(state): State<AppState>) -> Json<RuntimeConfig> {
    Json(RuntimeConfig {
        api_base_url: state.api_base_url.to_string(),
    })
}
