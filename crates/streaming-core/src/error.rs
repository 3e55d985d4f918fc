use openai_chat::ChatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamingError {
    #[error("prompt template not found: {0}")]
    TemplateNotFound(String),

    #[error("prompt template '{0}' is not valid UTF-8")]
    TemplateEncoding(String),

    #[error(
        "no usable caption list after {attempts} attempts (last parsed list had {count} items)",
        count = .last.len()
    )]
    ExhaustedRetries { attempts: usize, last: Vec<String> },

    #[error("caption list is empty")]
    EmptyCaptions,

    #[error("invalid duration: {0} seconds")]
    InvalidDuration(u64),

    #[error("missing required setting {0}")]
    MissingSetting(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("live hook returned status {0}, expected 204")]
    HookStatus(u16),

    #[error("live hook request failed: {0}")]
    HookTransport(#[source] reqwest::Error),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamingError>;
