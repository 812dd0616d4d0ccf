//! Process configuration
//!
//! All settings are read once at startup and shared read-only with every
//! component.

use std::env;
use thiserror::Error;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const APP_URL: &str = "APP_URL";
pub const LINE_CHANNEL_SECRET: &str = "LINE_CHANNEL_SECRET";
pub const LINE_CHANNEL_TOKEN: &str = "LINE_CHANNEL_TOKEN";
pub const PORT: &str = "PORT";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// Channel credentials are required before serving
    #[error("LINE_CHANNEL_SECRET and LINE_CHANNEL_TOKEN must be set")]
    MissingChannelCredentials,

    /// `PORT` is not a valid port number
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key; checked when the model is called, not at startup
    pub openrouter_api_key: Option<String>,
    /// Sent to OpenRouter as the referer
    pub app_url: Option<String>,
    /// LINE channel secret, used to verify webhook signatures
    pub channel_secret: String,
    /// LINE channel access token, used for the reply API
    pub channel_token: String,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let (channel_secret, channel_token) =
            match (get(LINE_CHANNEL_SECRET), get(LINE_CHANNEL_TOKEN)) {
                (Some(secret), Some(token)) => (secret, token),
                _ => return Err(ConfigError::MissingChannelCredentials),
            };

        let port = match get(PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            openrouter_api_key: get(OPENROUTER_API_KEY),
            app_url: get(APP_URL),
            channel_secret,
            channel_token,
            port,
        })
    }
}
