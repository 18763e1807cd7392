//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use storefront_payments::PaymentsClient;
use storefront_types::{AppError, ErrorResponse, HealthResponse, SessionError, SessionProvider};

use crate::{AuthShell, pages};

/// Application state shared across handlers.
pub struct AppState<P: SessionProvider> {
    pub sessions: P,
    pub payments: Arc<PaymentsClient>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        tracing::error!(status = status.as_u16(), "{}", message);

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health<P: SessionProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
        payments_environment: state.payments.environment(),
    })
}

pub async fn home() -> impl IntoResponse {
    Html(pages::HOME)
}

#[tracing::instrument]
pub async fn sign_in() -> AuthShell {
    AuthShell::new(pages::SIGN_IN_FORM)
}

#[tracing::instrument]
pub async fn sign_up() -> AuthShell {
    AuthShell::new(pages::SIGN_UP_FORM)
}
