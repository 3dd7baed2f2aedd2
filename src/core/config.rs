use std::env;

/// Persona prepended to every conversation. Keeps the assistant on
/// programming interview topics only.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a Programming Interview Assistant.

Rules:
- Only answer Data Structures and Algorithms related questions.
- Focus on coding interviews.
- First give a hint.
- Then explain approach.
- Then provide code (if asked).
- Always mention time and space complexity.
- If question is outside programming, politely refuse.
";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub ollama_url: String,
    pub ollama_model: String,
    pub system_prompt: String,
    pub probe_timeout_secs: u64,
    pub generate_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let ollama_url = env::var("CODEMENTOR_OLLAMA_URL")
            .unwrap_or_else(|_| "http://localhost:11434".to_string());
        let ollama_model =
            env::var("CODEMENTOR_MODEL").unwrap_or_else(|_| "tinyllama".to_string());
        let system_prompt = env::var("CODEMENTOR_SYSTEM_PROMPT")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string());
        let probe_timeout_secs = env::var("CODEMENTOR_PROBE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let generate_timeout_secs = env::var("CODEMENTOR_GENERATE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        Self {
            ollama_url,
            ollama_model,
            system_prompt,
            probe_timeout_secs,
            generate_timeout_secs,
        }
    }
}
