//! Session lookup against the external auth provider over HTTP.

use reqwest::{
    Client,
    header::{ACCEPT, COOKIE},
};

use storefront_types::{Session, SessionError, SessionProvider};

/// Path of the provider's session endpoint, relative to its base URL.
pub const SESSION_PATH: &str = "/api/auth/session";

/// Asks the auth provider's session endpoint about the caller.
///
/// The incoming request's cookies are forwarded as-is. The provider
/// answers `null` or `{}` when there is no session and a populated
/// object when there is one; anything else is a decode error.
pub struct RemoteSessionProvider {
    session_url: String,
    http: Client,
}

impl RemoteSessionProvider {
    pub fn new(auth_url: impl AsRef<str>) -> Self {
        Self {
            session_url: format!("{}{}", auth_url.as_ref().trim_end_matches('/'), SESSION_PATH),
            http: Client::new(),
        }
    }

    pub fn session_url(&self) -> &str {
        &self.session_url
    }
}

#[async_trait::async_trait]
impl SessionProvider for RemoteSessionProvider {
    #[tracing::instrument(skip_all)]
    async fn current_session(
        &self,
        cookie: Option<&str>,
    ) -> Result<Option<Session>, SessionError> {
        let mut req = self
            .http
            .get(&self.session_url)
            .header(ACCEPT, "application/json");
        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SessionError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SessionError::Decode(e.to_string()))?;

        let session = Session::from_provider_body(value)?;
        tracing::debug!(present = session.is_some(), "session lookup");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        Router,
        http::{HeaderMap, StatusCode, header},
        response::IntoResponse,
        routing::get,
    };

    /// Stand-in auth provider keyed on the forwarded cookie.
    async fn session_endpoint(headers: HeaderMap) -> axum::response::Response {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if cookie.contains("session-token=valid") {
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"user":{"email":"a@example.com"},"expires":"2030-01-01T00:00:00Z"}"#,
            )
                .into_response()
        } else if cookie.contains("session-token=legacy") {
            ([(header::CONTENT_TYPE, "application/json")], "null").into_response()
        } else if cookie.contains("session-token=broken") {
            (StatusCode::BAD_GATEWAY, "upstream down").into_response()
        } else if cookie.contains("session-token=boolean") {
            ([(header::CONTENT_TYPE, "application/json")], "false").into_response()
        } else if cookie.contains("session-token=garbled") {
            "<html>not json</html>".into_response()
        } else {
            ([(header::CONTENT_TYPE, "application/json")], "{}").into_response()
        }
    }

    async fn spawn_provider() -> String {
        let app = Router::new().route(SESSION_PATH, get(session_endpoint));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_session_url_joins_path() {
        let provider = RemoteSessionProvider::new("http://auth.local/");
        assert_eq!(provider.session_url(), "http://auth.local/api/auth/session");
    }

    #[tokio::test]
    async fn test_valid_cookie_yields_session() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        let session = provider
            .current_session(Some("theme=dark; session-token=valid"))
            .await
            .unwrap()
            .expect("session expected");
        assert_eq!(session.payload()["user"]["email"], "a@example.com");
    }

    #[tokio::test]
    async fn test_missing_cookie_yields_none() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        assert!(provider.current_session(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_null_body_yields_none() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        let session = provider
            .current_session(Some("session-token=legacy"))
            .await
            .unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_provider_failure_is_an_error() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        let err = provider
            .current_session(Some("session-token=broken"))
            .await
            .unwrap_err();
        match err {
            SessionError::Provider { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_garbled_body_is_a_decode_error() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        let err = provider
            .current_session(Some("session-token=garbled"))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_non_object_body_is_a_decode_error() {
        let provider = RemoteSessionProvider::new(spawn_provider().await);
        let err = provider
            .current_session(Some("session-token=boolean"))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_a_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = RemoteSessionProvider::new(format!("http://{}", addr));
        let err = provider.current_session(None).await.unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
    }
}
