mod core;
pub use self::core::{GatewayError, OllamaClient};
