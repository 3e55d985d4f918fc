use openai_chat::ChatBackend;

use crate::conversation::Conversation;
use crate::error::{Result, StreamingError};
use crate::parse::parse_captions;

/// Upper bound on chat round-trips for a single acquisition.
pub const MAX_ATTEMPTS: usize = 5;

/// Feedback sent when a reply parses but is too short.
pub fn shortfall_message(min_items: usize, got: usize) -> String {
    format!("Not enough items. I need at least {min_items}, but got {got}")
}

// ---------------------------------------------------------------------------
// CaptionAcquirer
// ---------------------------------------------------------------------------

/// Drives a self-correcting conversation until the model produces a caption
/// list that parses and is long enough.
///
/// Every rejected reply stays in the history, followed by a user turn that
/// explains what was wrong with it. Transport failures end the acquisition
/// immediately; only formatting and length problems are retried.
pub struct CaptionAcquirer<'a> {
    chat: &'a dyn ChatBackend,
    max_attempts: usize,
}

impl<'a> CaptionAcquirer<'a> {
    pub fn new(chat: &'a dyn ChatBackend) -> Self {
        Self {
            chat,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Ask for captions with `prompt` and return the first acceptable list.
    ///
    /// An empty list is never accepted, even when `min_items` is zero.
    /// Fails with [`StreamingError::ExhaustedRetries`] once the attempt budget
    /// is spent; the error carries the last list that parsed, if any.
    pub fn acquire(&self, prompt: &str, min_items: usize) -> Result<Vec<String>> {
        let min_items = min_items.max(1);
        let mut conversation = Conversation::new(prompt);
        let mut last = Vec::new();

        for attempt in 1..=self.max_attempts {
            tracing::debug!(attempt, messages = conversation.len(), "sending conversation");
            let reply = self.chat.complete(conversation.messages())?;
            tracing::debug!(attempt, reply_len = reply.len(), "model replied");

            let parsed = parse_captions(&reply);
            conversation.push_assistant(reply);

            match parsed {
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "model reply rejected");
                    conversation.push_user(e.to_string());
                }
                Ok(items) if items.len() < min_items => {
                    tracing::warn!(
                        attempt,
                        got = items.len(),
                        min_items,
                        "model reply too short"
                    );
                    conversation.push_user(shortfall_message(min_items, items.len()));
                    last = items;
                }
                Ok(items) => {
                    tracing::info!(attempt, count = items.len(), "captions acquired");
                    return Ok(items);
                }
            }
        }

        Err(StreamingError::ExhaustedRetries {
            attempts: self.max_attempts,
            last,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
