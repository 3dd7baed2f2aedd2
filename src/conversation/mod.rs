//! In-memory conversation transcript
//!
//! The transcript is an ordered log of lines: the system prompt first,
//! then alternating "Candidate:" and "Interviewer:" turns. The
//! alternation is a convention of how callers append, not something
//! enforced here. The transcript is never empty.

pub struct Conversation {
    system_prompt: String,
    transcript: Vec<String>,
}

impl Conversation {
    pub fn new(system_prompt: &str) -> Self {
        Self {
            system_prompt: system_prompt.to_string(),
            transcript: vec![system_prompt.to_string()],
        }
    }

    pub fn append_candidate(&mut self, text: &str) {
        self.transcript.push(format!("Candidate: {}", text));
    }

    pub fn append_interviewer(&mut self, text: &str) {
        self.transcript.push(format!("Interviewer: {}", text));
    }

    /// Render the full transcript as a single prompt, ending with an
    /// "Interviewer:" cue for the model to continue from.
    pub fn render_prompt(&self) -> String {
        format!("{}\nInterviewer:", self.transcript.join("\n"))
    }

    /// Truncate back to just the system prompt.
    pub fn reset(&mut self) {
        self.transcript = vec![self.system_prompt.clone()];
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.transcript
    }
}
