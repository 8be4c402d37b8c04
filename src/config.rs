//! Process configuration, read once from the environment at startup.
//!
//! A `.env` file in the working directory is loaded first when present.

use crate::weather_data::client::{DEFAULT_API_URL, DEFAULT_MODEL};
use log::{debug, warn};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidPort {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Meteomatics account. The password is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub model: String,
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from the process environment (and `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let credentials = Credentials::new(
            get("METEOMATICS_USERNAME", ""),
            get("METEOMATICS_PASSWORD", ""),
        );
        if credentials.is_empty() {
            warn!("Meteomatics credentials are not configured; weather requests will be rejected");
        }

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    key: "PORT",
                    value,
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            credentials,
            host: get("HOST", DEFAULT_HOST),
            port,
            debug: get("DEBUG", "True").to_lowercase() == "true",
            model: get("METEOMATICS_MODEL", DEFAULT_MODEL),
            api_url: get("METEOMATICS_API_URL", DEFAULT_API_URL),
        })
    }

    /// `host:port` the presentation layer should listen on.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
