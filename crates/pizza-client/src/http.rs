//! reqwest-backed [`OrderClient`]

use crate::config::ClientConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use pizza_form::{OrderClient, OrderConfirmation, SubmitError, ValidOrder};
use reqwest::Url;
use serde::Deserialize;

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Sends orders as `POST` JSON requests
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpOrderClient {
    /// Create client from configuration
    ///
    /// # Errors
    /// [`ClientError`] if the endpoint is invalid or the client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        tracing::debug!("Order client targeting {}", endpoint);
        Ok(Self { http, endpoint })
    }

    /// Order endpoint
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    async fn place_order(&self, order: &ValidOrder) -> Result<OrderConfirmation, SubmitError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(order)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<OrderConfirmation>()
                .await
                .map_err(|e| SubmitError::InvalidResponse(e.to_string()));
        }

        // The error body is opaque; only a top-level `message` is used.
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
