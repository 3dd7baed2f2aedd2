use crate::conversation::Conversation;
use crate::core::AppConfig;

pub struct AppState {
    // Single process-wide conversation. One logical interview at a
    // time; concurrent chats interleave appends.
    pub conversation: Conversation,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            conversation: Conversation::new(&config.system_prompt),
            config,
        }
    }
}
