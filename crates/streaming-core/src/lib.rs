pub mod acquire;
pub mod config;
pub mod conversation;
pub mod error;
pub mod hook;
pub mod pacing;
pub mod parse;
pub mod sequence;
pub mod templates;
pub mod types;

pub use error::{Result, StreamingError};
