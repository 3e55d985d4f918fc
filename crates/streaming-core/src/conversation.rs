use openai_chat::ChatMessage;

/// Append-only message history for one caption acquisition.
///
/// Turns can only be appended. Every reply and every piece of feedback stays
/// visible to the model for the rest of the exchange.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation whose first turn is `prompt` from the user.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }
}
