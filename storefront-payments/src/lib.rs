//! # Storefront Payments
//!
//! A typed Rust client for the external payments API.
//!
//! The client is built once from a resolved [`PaymentsConfig`] and shared
//! by reference (`Arc<PaymentsClient>`) for the life of the process. It
//! holds no mutable state.

use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;
use storefront_types::{PaymentsConfig, PaymentsEnvironment};

/// Base URL of the sandbox (test) API.
pub const SANDBOX_BASE_URL: &str = "https://connect.squareupsandbox.com";
/// Base URL of the production (live) API.
pub const PRODUCTION_BASE_URL: &str = "https://connect.squareup.com";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the API base URL for an environment.
pub fn base_url_for(environment: PaymentsEnvironment) -> &'static str {
    match environment {
        PaymentsEnvironment::Sandbox => SANDBOX_BASE_URL,
        PaymentsEnvironment::Production => PRODUCTION_BASE_URL,
    }
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    access_token: String,
    environment: PaymentsEnvironment,
    http: Client,
}

impl PaymentsClient {
    /// Creates a client for the given credential/environment pair.
    ///
    /// The token is not checked here; a bad token surfaces as
    /// [`ClientError::Api`] on the first request.
    pub fn from_config(config: &PaymentsConfig) -> Self {
        let environment = config.environment();
        tracing::debug!(environment = %environment, "building payments client");
        Self {
            base_url: base_url_for(environment).to_string(),
            access_token: config.access_token().to_string(),
            environment,
            http: Client::new(),
        }
    }

    /// Points the client at a different host (mocks, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Environment this client was built for.
    pub fn environment(&self) -> PaymentsEnvironment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues an authenticated `GET` and decodes the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Issues an authenticated `POST` with a JSON body and decodes the reply.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

impl fmt::Debug for PaymentsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentsClient")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Pulls a readable message out of an error body.
///
/// Understands `{"error": "..."}` and `{"errors": [{"detail": "..."}]}`;
/// anything else is returned raw.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    value
        .get("error")
        .and_then(|e| e.as_str())
        .or_else(|| {
            value
                .get("errors")
                .and_then(|e| e.get(0))
                .and_then(|e| e.get("detail"))
                .and_then(|d| d.as_str())
        })
        .map(String::from)
        .unwrap_or_else(|| body.to_string())
}
