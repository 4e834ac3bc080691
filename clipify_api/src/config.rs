//! Client configuration.

use serde::{Deserialize, Serialize};

/// Production endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://clip-ify.pockethost.io";

/// Environment variable read by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "CLIPIFY_BASE_URL";

/// Options accepted when building a [`Client`](crate::Client).
///
/// Deserializes from `{ "baseUrl": "..." }`. A missing or empty `baseUrl`
/// resolves to [`DEFAULT_BASE_URL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: Some(base_url.to_string()),
        }
    }

    /// Reads the base URL from `CLIPIFY_BASE_URL`, if set.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV).ok(),
        }
    }

    /// The base URL requests are sent to.
    pub fn resolved_base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL,
        }
    }
}
