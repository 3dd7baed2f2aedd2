//! Router for the chat API

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    routing::post,
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::ollama::OllamaClient;

type SharedState = Arc<RwLock<AppState>>;

fn gateway(state: &SharedState) -> OllamaClient {
    let shared = state.read().expect("Unable to read shared state");
    let config = &shared.config;
    OllamaClient::new(&config.ollama_url, &config.ollama_model).with_timeouts(
        Duration::from_secs(config.probe_timeout_secs),
        Duration::from_secs(config.generate_timeout_secs),
    )
}

/// Append the candidate's message, ask Ollama to continue the
/// transcript, and record the reply
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatReply>, ApiError> {
    let prompt = {
        let mut shared = state.write().expect("Unable to write shared state");
        shared.conversation.append_candidate(&payload.message);
        shared.conversation.render_prompt()
    };

    // The candidate line above stays in the transcript even when
    // generation fails; only a successful reply appends an
    // interviewer line.
    let reply = gateway(&state).generate(&prompt).await?;

    state
        .write()
        .expect("Unable to write shared state")
        .conversation
        .append_interviewer(&reply);

    Ok(axum::Json(public::ChatReply { reply }))
}

/// Truncate the conversation back to the system prompt
async fn reset_handler(State(state): State<SharedState>) -> axum::Json<public::ResetResponse> {
    state
        .write()
        .expect("Unable to write shared state")
        .conversation
        .reset();

    axum::Json(public::ResetResponse {
        status: "conversation reset".to_string(),
    })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/reset", post(reset_handler))
}
