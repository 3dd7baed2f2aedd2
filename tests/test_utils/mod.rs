//! Test utilities for integration tests
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use codementor::api::AppState;
use codementor::api::app;
use codementor::core::AppConfig;

/// Creates a test application router pointed at the given Ollama base
/// URL, along with the shared state so tests can inspect the
/// transcript.
pub fn test_app(ollama_url: &str) -> (Router, Arc<RwLock<AppState>>) {
    test_app_with_generate_timeout(ollama_url, 5)
}

/// Same as `test_app` but with a custom generation timeout, for tests
/// that exercise the gateway timeout path.
#[allow(dead_code)]
pub fn test_app_with_generate_timeout(
    ollama_url: &str,
    generate_timeout_secs: u64,
) -> (Router, Arc<RwLock<AppState>>) {
    let app_config = AppConfig {
        ollama_url: ollama_url.to_string(),
        ollama_model: String::from("tinyllama"),
        system_prompt: String::from("You are a Programming Interview Assistant."),
        probe_timeout_secs: 5,
        generate_timeout_secs,
    };
    let app_state = AppState::new(app_config);
    let shared_state = Arc::new(RwLock::new(app_state));
    (app(Arc::clone(&shared_state)), shared_state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not utf-8")
}

/// Backend that answers the health probe but never responds to the
/// generation call. Used to exercise the gateway timeout path.
#[allow(dead_code)]
pub async fn stalling_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                if buf[..n].starts_with(b"GET") {
                    let resp = "HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}";
                    let _ = socket.write_all(resp.as_bytes()).await;
                } else {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                }
            });
        }
    });
    format!("http://{}", addr)
}
