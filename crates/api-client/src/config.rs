//! Configuration for the Tremendous API client
//!
//! Two fixed environments are recognized (sandbox and production); a
//! custom base address can be supplied for testing against a local
//! server.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed base address of the sandbox environment
const SANDBOX_URL: &str = "https://testflight.tremendous.com/api/v2";

/// Fixed base address of the production environment
const PRODUCTION_URL: &str = "https://www.tremendous.com/api/v2";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test environment; orders placed here are never funded
    Sandbox,
    /// Live environment
    Production,
    /// Caller-supplied base address
    Custom,
}

impl Environment {
    /// Fixed base address for this environment, if it has one.
    #[must_use]
    pub fn base_url(self) -> Option<&'static str> {
        match self {
            Self::Sandbox => Some(SANDBOX_URL),
            Self::Production => Some(PRODUCTION_URL),
            Self::Custom => None,
        }
    }
}

/// Client configuration
///
/// Immutable once handed to a client; the client stores it behind an
/// `Arc` and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer credential for the `Authorization` header
    pub access_token: String,
    /// Base address all resource paths are resolved under
    pub base_url: String,
    /// Request timeout applied by the transport
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Which environment this configuration points at
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl ClientConfig {
    /// Create a configuration for the sandbox environment
    #[must_use]
    pub fn sandbox(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: SANDBOX_URL.to_string(),
            timeout: Duration::from_secs(30),
            environment: Environment::Sandbox,
        }
    }

    /// Create a configuration for the production environment
    #[must_use]
    pub fn production(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: PRODUCTION_URL.to_string(),
            timeout: Duration::from_secs(30),
            environment: Environment::Production,
        }
    }

    /// Create a configuration with a caller-supplied base address
    #[must_use]
    pub fn new(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            environment: Environment::Custom,
        }
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the access token or base address
    /// is empty. These are the only construction-time failures.
    pub fn validate(&self) -> ApiResult<()> {
        if self.access_token.is_empty() {
            return Err(ApiError::config("access_token cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        Ok(())
    }
}
