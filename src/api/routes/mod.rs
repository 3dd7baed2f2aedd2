//! API routes module

pub mod chat;
pub mod health;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat and reset routes
        .merge(chat::router())
        // Health routes
        .merge(health::router())
}
