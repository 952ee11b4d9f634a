//! Client configuration loaded from the environment.

use crate::error::ServiceError;
use std::time::Duration;
use tracing::debug;

/// Base URL variable.
pub const ENV_API_URL: &str = "RENDA_FIXA_API_URL";
/// Deadline variable, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "RENDA_FIXA_TIMEOUT_SECS";
/// Session cookie variable, forwarded as the `Cookie` header.
pub const ENV_SESSION_COOKIE: &str = "RENDA_FIXA_SESSION_COOKIE";

/// Configuration for the calculation service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, without trailing slash.
    pub base_url: String,
    /// Deadline for a whole user-triggered action.
    pub timeout: Duration,
    /// Session cookie for endpoints that sit behind a login.
    pub session_cookie: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout: Duration::from_secs(30),
            session_cookie: None,
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ServiceError::Config(format!(
                    "{ENV_API_URL} deve começar com http:// ou https://"
                )));
            }
            config.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ServiceError::Config(format!("{ENV_TIMEOUT_SECS} inválido: {raw}"))
            })?;
            if secs == 0 {
                return Err(ServiceError::Config(format!(
                    "{ENV_TIMEOUT_SECS} deve ser maior que zero"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        config.session_cookie = lookup(ENV_SESSION_COOKIE).filter(|v| !v.trim().is_empty());

        debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            has_session = config.session_cookie.is_some(),
            "Loaded client configuration"
        );
        Ok(config)
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
