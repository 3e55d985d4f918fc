use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode chat completion: {source}\n  body: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("chat completion contained no message content")]
    EmptyResponse,
}
