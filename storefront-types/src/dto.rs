//! Data Transfer Objects (DTOs) for responses.

use serde::{Deserialize, Serialize};

use crate::domain::PaymentsEnvironment;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub payments_environment: PaymentsEnvironment,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}
