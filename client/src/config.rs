//! Remote API configuration.
//!
//! DESIGN
//! ======
//! The API base address is resolved exactly once at bootstrap and handed to
//! the `ApiClient` as a value. The host reads it from the process environment
//! and publishes it in the rendered shell; the browser reads it back from that
//! `<meta>` tag during hydration. Nothing downstream re-reads configuration.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed base address is a `ConfigError`, never a silent
//! default. The host refuses to start; the browser renders a configuration
//! error page in place of the router.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable (host) and build-time variable (browser) naming the
/// remote API base address.
pub const API_BASE_ENV: &str = "API_BASE_URL";

/// `<meta name=...>` tag carrying the base address into the browser.
pub const API_BASE_META: &str = "threads-api-base";

/// Errors raised while resolving startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required value was not provided.
    #[error("missing required configuration: {0}")]
    Missing(&'static str),

    /// A value was provided but cannot be used.
    #[error("invalid API base URL {value:?}: {reason}")]
    Invalid { value: String, reason: &'static str },
}

/// Validated remote API base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate a raw base address.
    ///
    /// Surrounding whitespace and trailing slashes are removed so that
    /// [`ApiConfig::endpoint`] joins paths deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an absent or blank value and
    /// [`ConfigError::Invalid`] when the value is not an `http(s)` URL.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ConfigError::Missing(API_BASE_ENV));
        }

        let Some(rest) = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
        else {
            return Err(ConfigError::Invalid { value: value.to_owned(), reason: "expected an http:// or https:// URL" });
        };

        let base_url = value.trim_end_matches('/');
        if rest.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Invalid { value: value.to_owned(), reason: "missing host" });
        }

        Ok(Self { base_url: base_url.to_owned() })
    }

    /// The normalized base address, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path onto the base address.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Resolve the base address inside the browser.
    ///
    /// Reads the `<meta name="threads-api-base">` tag written by the host, then
    /// falls back to an `API_BASE_URL` value baked in at build time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when neither source yields a valid address.
    pub fn from_document() -> Result<Self, ConfigError> {
        match read_meta_base() {
            Some(value) => Self::parse(Some(&value)),
            None => Self::parse(option_env!("API_BASE_URL")),
        }
    }
}

/// Bootstrap outcome shared with the root component through context.
#[derive(Clone, Debug)]
pub struct BootConfig(pub Result<ApiConfig, ConfigError>);

fn read_meta_base() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_META}\"]");
        let meta = document.query_selector(&selector).ok()??;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
