// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Unified failure type for every outbound fetch and service operation.
///
/// All transport-level failures (connection errors, non-2xx statuses,
/// undecodable bodies) normalize into one of the first three variants;
/// callers decide per feed whether a failure is fatal or degrades to an
/// empty result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("not signed in")]
    Unauthenticated,

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("other error: {0}")]
    Other(String),
}

impl AppError {
    /// Whether a retry could plausibly succeed. Connection-level failures
    /// and 5xx statuses qualify; client errors and decode failures do not.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Transport(_) => true,
            AppError::UpstreamStatus(status) => *status >= 500,
            _ => false,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedPayload(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::UpstreamStatus(status.as_u16())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedPayload(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_transient() {
        assert!(AppError::Transport("connection refused".into()).is_transient());
        assert!(AppError::UpstreamStatus(503).is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        assert!(!AppError::UpstreamStatus(404).is_transient());
        assert!(!AppError::MalformedPayload("bad json".into()).is_transient());
        assert!(!AppError::Unauthenticated.is_transient());
    }
}
