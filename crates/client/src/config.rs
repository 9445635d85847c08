use std::{env, fmt, time::Duration};

use calendly_core::DEFAULT_BASE_URL;
use url::Url;

use crate::error::{ClientError, Result};

/// Bearer credential issued by Calendly. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin (default: `https://api.calendly.com`)
    pub base_url: Url,
    /// Credential attached to every request
    pub token: AccessToken,
    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration for the production API.
    pub fn new(token: impl Into<AccessToken>) -> Self {
        Self {
            base_url: default_base_url(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Point the client at another origin.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CALENDLY_TOKEN` - Personal access or OAuth token (required)
    /// - `CALENDLY_API_URL` - API origin (default: "https://api.calendly.com")
    /// - `CALENDLY_TIMEOUT_SECS` - Request timeout in seconds (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("CALENDLY_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ClientError::Config("CALENDLY_TOKEN is not set".to_string()))?;

        let mut config = Self::new(token);

        if let Some(base_url) = lookup("CALENDLY_API_URL") {
            config = config.with_base_url(&base_url)?;
        }

        if let Some(secs) = lookup("CALENDLY_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ClientError::Config(format!("CALENDLY_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL must be valid URL")
}

/// Parse an origin, rejecting anything that cannot carry an HTTP request.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| ClientError::Config(format!("invalid base URL {base_url}: {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ClientError::Config(format!(
                "unsupported URL scheme {scheme} in {base_url}"
            )))
        }
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::Config(format!(
            "base URL must not carry a query or fragment: {base_url}"
        )));
    }
    Ok(url)
}
