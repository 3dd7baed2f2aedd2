//! Client for a locally-running Ollama instance
//!
//! Every failure of the backend is classified into one of the
//! `GatewayError` variants so the API layer can map it to a status
//! code. Nothing is retried; the backend is a single local process
//! and a failed call is surfaced to the caller immediately.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Ollama is not reachable. Start it with `ollama serve` and try again.")]
    ServiceUnavailable,
    #[error("Ollama took longer than {0} seconds to respond")]
    GatewayTimeout(u64),
    #[error("Ollama returned an unexpected result: {0}")]
    Upstream(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    probe_timeout: Duration,
    generate_timeout: Duration,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            probe_timeout: Duration::from_secs(5),
            generate_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeouts(mut self, probe: Duration, generate: Duration) -> Self {
        self.probe_timeout = probe;
        self.generate_timeout = generate;
        self
    }

    /// Check whether Ollama is reachable by hitting its model listing
    /// endpoint. Any network failure, timeout, or non-success status
    /// collapses to `false`.
    pub async fn probe(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match reqwest::Client::new()
            .get(url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Generate a completion for the rendered prompt. Probes the
    /// backend first; no generation call is attempted when it is
    /// unreachable.
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if !self.probe().await {
            return Err(GatewayError::ServiceUnavailable);
        }

        let url = format!("{}/api/generate", self.base_url);
        let payload = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });
        let response = reqwest::Client::new()
            .post(url)
            .header("Content-Type", "application/json")
            .timeout(self.generate_timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Upstream(format!(
                "Ollama responded with status {}",
                status.as_u16()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|_| GatewayError::Upstream("invalid response from Ollama".to_string()))?;

        Ok(body.response)
    }

    fn classify(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::GatewayTimeout(self.generate_timeout.as_secs())
        } else if err.is_connect() {
            GatewayError::ServiceUnavailable
        } else {
            GatewayError::Internal(err.into())
        }
    }
}
