//! Router for the health API

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, extract::State, routing::get};

use super::public;
use crate::api::state::AppState;
use crate::ollama::OllamaClient;

type SharedState = Arc<RwLock<AppState>>;

/// Report whether Ollama is reachable
async fn health_handler(State(state): State<SharedState>) -> axum::Json<public::HealthResponse> {
    let client = {
        let shared = state.read().expect("Unable to read shared state");
        let config = &shared.config;
        OllamaClient::new(&config.ollama_url, &config.ollama_model).with_timeouts(
            Duration::from_secs(config.probe_timeout_secs),
            Duration::from_secs(config.generate_timeout_secs),
        )
    };

    let connected = client.probe().await;

    axum::Json(public::HealthResponse {
        status: "ok".to_string(),
        ollama: if connected {
            "connected".to_string()
        } else {
            "disconnected".to_string()
        },
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/health", get(health_handler))
}
