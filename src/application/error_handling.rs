// src/application/error_handling.rs
//
// Maps internal errors to the envelope the rendering shell consumes.
// Never exposes transport internals; `retryable` drives whether the
// shell offers a manual retry affordance.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the UI boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Connection-level failure
    Network,

    /// The catalog answered with a non-success status
    Upstream,

    /// The catalog answered with something undecodable
    Malformed,

    /// Rating submission without a session; the shell redirects to
    /// sign-in
    Unauthenticated,

    /// A business rule rejected the input
    Validation,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: &AppError) -> Self {
        let retryable = error.is_transient();
        match error {
            AppError::Transport(_) => Self {
                error_type: ErrorType::Network,
                message: "Could not reach the movie service".to_string(),
                retryable,
            },
            AppError::UpstreamStatus(status) => Self {
                error_type: ErrorType::Upstream,
                message: format!("The movie service answered with status {status}"),
                retryable,
            },
            AppError::MalformedPayload(_) => Self {
                error_type: ErrorType::Malformed,
                message: "The movie service answered with unexpected data".to_string(),
                retryable,
            },
            AppError::Unauthenticated => Self {
                error_type: ErrorType::Unauthenticated,
                message: "Sign in to rate movies".to_string(),
                retryable: false,
            },
            AppError::Domain(domain_error) => Self {
                error_type: ErrorType::Validation,
                message: domain_error.to_string(),
                retryable: false,
            },
            AppError::Other(_) => Self {
                error_type: ErrorType::Internal,
                message: "Something went wrong".to_string(),
                retryable,
            },
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self::from_app_error(error)
    }
}
