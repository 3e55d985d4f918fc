//! Settings resolved once at startup.
//!
//! Sources, lowest precedence first:
//!   1. an optional dotenv file (default `.env`)
//!   2. the process environment
//!
//! The dotenv file is read into a map; the process environment is never
//! modified.

use crate::error::{Result, StreamingError};
use crate::hook::{LiveHook, DEFAULT_HOOK_URL};
use openai_chat::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";
pub const HOOK_TOKEN: &str = "PERSONAL_PAGE_API_KEY";
pub const HOOK_URL: &str = "PERSONAL_PAGE_URL";
pub const TICK_MS: &str = "STREAMING_TICK_MS";

/// Every key [`Config`] reads.
pub const KEYS: &[&str] = &[
    OPENAI_API_KEY,
    OPENAI_BASE_URL,
    OPENAI_MODEL,
    OPENAI_TIMEOUT_SECS,
    HOOK_TOKEN,
    HOOK_URL,
    TICK_MS,
];

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub request_timeout: Duration,
    pub hook_url: String,
    pub hook_token: Option<String>,
    /// Length of one countdown tick.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            hook_url: DEFAULT_HOOK_URL.to_string(),
            hook_token: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Config {
    /// Resolve from `env_file` (ignored when missing) and the process
    /// environment.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        Self::load_with(env_file, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`] with a custom environment lookup.
    pub fn load_with(
        env_file: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => HashMap::new(),
        };
        for key in KEYS {
            if let Some(value) = lookup(key) {
                vars.insert((*key).to_string(), value);
            }
        }
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        let defaults = Self::default();

        Ok(Self {
            openai_api_key: get(OPENAI_API_KEY),
            openai_base_url: get(OPENAI_BASE_URL).unwrap_or(defaults.openai_base_url),
            openai_model: get(OPENAI_MODEL).unwrap_or(defaults.openai_model),
            request_timeout: match get(OPENAI_TIMEOUT_SECS) {
                Some(v) => Duration::from_secs(parse_u64(OPENAI_TIMEOUT_SECS, &v)?),
                None => defaults.request_timeout,
            },
            hook_url: get(HOOK_URL).unwrap_or(defaults.hook_url),
            hook_token: get(HOOK_TOKEN),
            tick: match get(TICK_MS) {
                Some(v) => Duration::from_millis(parse_u64(TICK_MS, &v)?),
                None => defaults.tick,
            },
        })
    }

    /// Chat client settings. Fails when no API key is configured.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api_key = self
            .openai_api_key
            .clone()
            .ok_or(StreamingError::MissingSetting(OPENAI_API_KEY))?;
        Ok(ClientConfig {
            api_key,
            base_url: self.openai_base_url.clone(),
            model: self.openai_model.clone(),
            timeout: self.request_timeout,
        })
    }

    /// The live hook, or `None` when no token is configured.
    pub fn live_hook(&self) -> Result<Option<LiveHook>> {
        match &self.hook_token {
            Some(token) => Ok(Some(LiveHook::new(
                &self.hook_url,
                token,
                self.request_timeout,
            )?)),
            None => Ok(None),
        }
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64> {
    value.parse().map_err(|_| StreamingError::InvalidSetting {
        key,
        value: value.to_string(),
    })
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "env file not found, skipping");
        return Ok(HashMap::new());
    }
    let env_err = |source| StreamingError::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(env_err)? {
        let (key, value) = item.map_err(env_err)?;
        vars.insert(key, value);
    }
    Ok(vars)
}
