use super::Message;

/// The system prompts placed in front of every user message.
///
/// Built once from [`super::ClientConfig`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptConfig {
    core_prompt: String,
    role_prompt: String,
}

impl PromptConfig {
    pub fn new(core_prompt: impl Into<String>, role_prompt: impl Into<String>) -> Self {
        Self {
            core_prompt: core_prompt.into(),
            role_prompt: role_prompt.into(),
        }
    }

    pub fn core_prompt(&self) -> &str {
        &self.core_prompt
    }

    pub fn role_prompt(&self) -> &str {
        &self.role_prompt
    }

    pub fn has_role_prompt(&self) -> bool {
        !self.role_prompt.trim().is_empty()
    }

    /// Build the input sequence for one call: the core prompt, then the role
    /// prompt when it has any non-whitespace content, then the user message
    /// verbatim (empty messages included).
    pub fn compose_messages(&self, user_message: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(3);
        messages.push(Message::system(self.core_prompt.as_str()));
        if self.has_role_prompt() {
            messages.push(Message::system(self.role_prompt.as_str()));
        }
        messages.push(Message::user(user_message));
        messages
    }
}
