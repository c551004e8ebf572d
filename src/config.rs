use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.coinpaprika.com";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("COINS_BASE_URL is not a valid url: {0}")]
    InvalidBaseUrl(String),
    #[error("COINS_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("SERVER_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("COINS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(raw_url.trim()).map_err(|_| ConfigError::InvalidBaseUrl(raw_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(raw_url));
        }

        let request_timeout = match lookup("COINS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            base_url,
            request_timeout,
            host,
            port,
        })
    }
}
