//! Chat front end configuration
//!
//! The endpoint is fixed at build time: the frontend passes
//! `option_env!("KBCHAT_API_URL")` to [`ChatConfig::from_endpoint_override`].

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Endpoint used when no override is configured
pub const DEFAULT_ENDPOINT: &str = "https://localhost/";

/// Request timeout for a single question
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum draft length, in characters
pub const MAX_MESSAGE_CHARS: usize = 120;

/// Configuration for the question-answering front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the question-answering endpoint, used as given
    pub endpoint: String,
    /// Timeout applied to each outbound request
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Maximum number of characters accepted in the draft message
    pub max_message_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_message_chars: MAX_MESSAGE_CHARS,
        }
    }
}

impl ChatConfig {
    /// Build the default configuration, replacing the endpoint when an override is set.
    ///
    /// Blank overrides are treated as unset.
    pub fn from_endpoint_override(endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint.to_string();
        }
        config
    }

    /// Check that the configuration can be used to issue requests
    pub fn validate(&self) -> CoreResult<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            CoreError::invalid_config(format!("endpoint {:?} is not a valid URL: {e}", self.endpoint))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::invalid_config(format!(
                "endpoint scheme must be http or https, got {}",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(CoreError::invalid_config("timeout must be greater than zero"));
        }

        if self.max_message_chars == 0 {
            return Err(CoreError::invalid_config(
                "max_message_chars must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Placeholder shown in the empty input field
    pub fn placeholder(&self) -> String {
        format!("Enter a message (max {} characters)", self.max_message_chars)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
