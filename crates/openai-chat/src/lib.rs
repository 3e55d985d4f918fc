//! `openai-chat`: blocking driver for OpenAI-compatible chat completions.
//!
//! The `streaming` workspace only ever needs one thing from a language model:
//! send an ordered conversation, get one assistant reply back. This crate
//! owns the wire types and the HTTP call so the rest of the workspace can
//! depend on the [`ChatBackend`] trait instead.
//!
//! # Architecture
//!
//! ```text
//! ClientConfig   ← api key, base url, model, timeout
//!     │
//!     ▼
//! ChatClient     ← POST {base_url}/chat/completions (reqwest, blocking)
//!     │
//!     ▼
//! ChatBackend    ← complete(&[ChatMessage]) -> Result<String>
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use openai_chat::{ChatBackend, ChatClient, ChatMessage, ClientConfig};
//!
//! let client = ChatClient::new(ClientConfig::new("sk-..."))?;
//! let reply = client.complete(&[ChatMessage::user("Say hello")])?;
//! println!("{reply}");
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{ChatBackend, ChatClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::ChatError;
pub use types::{ChatCompletion, ChatMessage, ChatRequest, Choice, Role, Usage};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, ChatError>;
