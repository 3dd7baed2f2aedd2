//! Public types for the chat API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub status: String,
}
