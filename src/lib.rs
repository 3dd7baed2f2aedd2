pub mod api;
pub mod cli;
pub mod conversation;
pub mod core;
pub mod ollama;
