//! Client configuration

use crate::error::ClientError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend
    pub base_url: String,
    /// Path of the order endpoint
    pub order_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Default backend address
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:9009";
    /// Default order endpoint path
    pub const DEFAULT_ORDER_PATH: &'static str = "/api/order";

    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With order endpoint path
    #[inline]
    #[must_use]
    pub fn with_order_path(mut self, path: impl Into<String>) -> Self {
        self.order_path = path.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// With `User-Agent` header
    #[inline]
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the order endpoint URL
    ///
    /// # Errors
    /// `ClientError::InvalidUrl` if the base URL does not parse or is not
    /// http(s), or the path cannot be joined onto it.
    pub fn endpoint(&self) -> Result<Url, ClientError> {
        let base = Url::parse(&self.base_url).map_err(|e| ClientError::invalid_url(&self.base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", base.scheme()),
            });
        }
        base.join(&self.order_path)
            .map_err(|e| ClientError::invalid_url(&self.order_path, e))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            order_path: Self::DEFAULT_ORDER_PATH.to_string(),
            timeout_secs: 10,
            user_agent: format!("pizza-client/{}", crate::VERSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let url = ClientConfig::new().endpoint().unwrap();
        assert_eq!(url.as_str(), "http://localhost:9009/api/order");
    }

    #[test]
    fn path_replaces_base_path() {
        let url = ClientConfig::new()
            .with_base_url("https://pizza.example/shop/")
            .endpoint()
            .unwrap();
        assert_eq!(url.as_str(), "https://pizza.example/api/order");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = ClientConfig::new().with_base_url("not a url").endpoint().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));

        let err = ClientConfig::new().with_base_url("ftp://pizza.example").endpoint().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn user_agent_builder_overrides_default() {
        let config = ClientConfig::new().with_user_agent("order-kiosk/2");
        assert_eq!(config.user_agent, "order-kiosk/2");
        assert!(ClientConfig::new().user_agent.starts_with("pizza-client/"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{ "timeout_secs": 2 }"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.base_url, ClientConfig::DEFAULT_BASE_URL);
    }
}
