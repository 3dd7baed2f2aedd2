use std::time::Duration;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::conversation::Conversation;
use crate::core::AppConfig;
use crate::ollama::OllamaClient;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let client = OllamaClient::new(&config.ollama_url, &config.ollama_model).with_timeouts(
        Duration::from_secs(config.probe_timeout_secs),
        Duration::from_secs(config.generate_timeout_secs),
    );

    let mut conversation = Conversation::new(&config.system_prompt);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                conversation.append_candidate(line.as_str());
                match client.generate(&conversation.render_prompt()).await {
                    Ok(reply) => {
                        conversation.append_interviewer(&reply);
                        println!("{}", reply);
                    }
                    // Keep the session going; the candidate line stays
                    // in the transcript
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
