//! "Live / not live" notification for the personal website.

use serde::Serialize;
use std::time::Duration;

use crate::error::{Result, StreamingError};

pub const DEFAULT_HOOK_URL: &str = "https://kozak.in/api/live";

#[derive(Debug, Serialize)]
struct LivePayload {
    live: bool,
}

pub struct LiveHook {
    http: reqwest::blocking::Client,
    url: String,
    token: String,
}

impl LiveHook {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StreamingError::HookTransport)?;
        Ok(Self {
            http,
            url: url.to_string(),
            token: token.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `{"live": live}`. Only `204 No Content` counts as success.
    pub fn notify(&self, live: bool) -> Result<()> {
        tracing::info!(url = %self.url, live, "posting live status");
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&LivePayload { live })
            .send()
            .map_err(StreamingError::HookTransport)?;

        let status = response.status();
        if status != reqwest::StatusCode::NO_CONTENT {
            return Err(StreamingError::HookStatus(status.as_u16()));
        }
        Ok(())
    }
}
