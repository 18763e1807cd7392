//! Error types for the storefront.

/// Failures while asking the auth provider for the current session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session provider unreachable: {0}")]
    Transport(String),

    #[error("Session provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid session payload: {0}")]
    Decode(String),
}

/// Configuration values that are present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Internal(err.to_string())
    }
}
