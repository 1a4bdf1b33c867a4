//! Client construction errors
//!
//! Request-time failures are reported as [`pizza_form::SubmitError`] so the
//! form can render them; this type only covers building the client.

use std::fmt::Display;

/// Errors creating an [`crate::HttpOrderClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Endpoint URL is malformed
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl {
        /// Offending URL or path
        url: String,
        /// Parse failure
        reason: String,
    },

    /// HTTP client could not be built
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

impl ClientError {
    pub(crate) fn invalid_url(url: &str, reason: impl Display) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
