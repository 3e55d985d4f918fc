//! Extraction of a caption list from free-form model output.
//!
//! Models wrap their answer in prose, markdown fences and apologies. The
//! parser looks for exactly one bracketed span without a nested `]` and
//! decodes it as a JSON array of strings. Error messages are written for
//! the model: they are sent back verbatim as the next user turn.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Zero candidate arrays, or more than one.
    #[error("could not find json array in response")]
    NoArrayFound,

    #[error("could not parse json: {0}")]
    InvalidJson(String),
}

static ARRAY_RE: OnceLock<Regex> = OnceLock::new();

fn array_re() -> &'static Regex {
    ARRAY_RE.get_or_init(|| Regex::new(r"\[[^\]]+\]").unwrap())
}

/// Pull the single JSON string array out of `raw`.
pub fn parse_captions(raw: &str) -> Result<Vec<String>, ParseError> {
    let mut candidates = array_re().find_iter(raw);
    let (Some(only), None) = (candidates.next(), candidates.next()) else {
        return Err(ParseError::NoArrayFound);
    };

    serde_json::from_str::<Vec<String>>(only.as_str())
        .map_err(|e| ParseError::InvalidJson(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
