//! Error types for the order form
//!
//! Validation failures live in [`crate::validation`]; this module covers
//! input events that cannot be applied and submissions that do not succeed.

use crate::validation::ValidationReport;

/// Submission failure reported by an [`crate::OrderClient`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with an error status
    #[error("order rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` from the error body, if the server sent one
        message: Option<String>,
    },

    /// Success response could not be read
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Text for the failure banner
    ///
    /// Prefers the server-provided message; never empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { status, .. } => format!("order failed with status {status}"),
            Self::Transport(_) => "order could not be sent, please try again".to_string(),
            Self::InvalidResponse(_) => "order status is unknown, please try again".to_string(),
        }
    }

    /// Check if resubmitting unchanged could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::InvalidResponse(_) => false,
        }
    }
}

/// Why a submit trigger or response was not acted on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// Form fails whole-form validation
    #[error("form is invalid: {0}")]
    Invalid(#[from] ValidationReport),

    /// Another submission has not completed yet
    #[error("an order is already being submitted")]
    InFlight,

    /// A response arrived with no submission pending
    #[error("no order is being submitted")]
    NotInFlight,
}

/// Input event that does not map onto the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeError {
    /// Input id names no form field
    #[error("unknown field: '{0}'")]
    UnknownField(String),

    /// Field cannot be edited with this kind of input
    #[error("field '{field}' cannot be changed by a {kind} input")]
    WrongInputKind {
        /// Target field
        field: String,
        /// Input kind that was used
        kind: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = SubmitError::Rejected {
            status: 422,
            message: Some("size must be S or M or L".into()),
        };
        assert_eq!(err.user_message(), "size must be S or M or L");
    }

    #[test]
    fn user_message_falls_back_to_status() {
        let err = SubmitError::Rejected {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(err.user_message(), "order failed with status 500");
    }

    #[test]
    fn user_message_is_never_empty() {
        for err in [
            SubmitError::Transport(String::new()),
            SubmitError::InvalidResponse(String::new()),
            SubmitError::Rejected {
                status: 400,
                message: None,
            },
        ] {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn retryability() {
        assert!(SubmitError::Transport("refused".into()).is_retryable());
        assert!(SubmitError::Rejected { status: 503, message: None }.is_retryable());
        assert!(!SubmitError::Rejected { status: 422, message: None }.is_retryable());
        assert!(!SubmitError::InvalidResponse("eof".into()).is_retryable());
    }
}
