//! Host configuration parsed once from the environment at startup.
//!
//! Required:
//! - `API_BASE_URL`: absolute `http(s)` address of the remote threads service
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//!
//! A `.env` file in the working directory is loaded first when present.

use std::net::SocketAddr;
use std::num::ParseIntError;

use threads_client::config::{API_BASE_ENV, ApiConfig, ConfigError};

pub const DEFAULT_PORT: u16 = 3000;

/// Everything that can stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("{var}: {0}", var = API_BASE_ENV)]
    ApiBase(#[from] ConfigError),

    #[error("invalid PORT {value:?}: {source}")]
    Port { value: String, source: ParseIntError },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub api: ApiConfig,
    pub port: u16,
}

impl HostConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ApiBase`] when `API_BASE_URL` is missing or not an
    /// absolute http(s) address, and [`HostError::Port`] when `PORT` is set but
    /// not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] against an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let api = ApiConfig::parse(lookup(API_BASE_ENV).as_deref())?;
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| HostError::Port { value: raw.clone(), source })?,
        };
        Ok(Self { api, port })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
