//! Auth gate for the sign-in and sign-up pages.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use storefront_types::SessionProvider;

use super::handlers::{ApiError, AppState};

/// Where signed-in visitors are sent.
pub const SIGNED_IN_REDIRECT: &str = "/";

/// Keeps signed-in visitors off the auth pages.
///
/// Asks the session provider once per request:
/// - session present: responds with a redirect to `/`; the page is not rendered
/// - no session: runs the wrapped route and returns its response untouched
///
/// A failed lookup is not retried or treated as "signed out"; it goes
/// through [`ApiError`] like any other handler error.
pub async fn auth_gate<P: SessionProvider>(
    State(state): State<Arc<AppState<P>>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let cookie = cookie_header(request.headers());

    let session = state.sessions.current_session(cookie.as_deref()).await?;

    match session {
        Some(_) => {
            tracing::debug!(path = %request.uri().path(), "session present, redirecting");
            Ok(Redirect::to(SIGNED_IN_REDIRECT).into_response())
        }
        None => Ok(next.run(request).await),
    }
}

/// Collects every `Cookie` field into one header value.
///
/// HTTP/2 clients and some proxies split cookies across several fields;
/// they are joined with `"; "`. Bytes that are not valid UTF-8 are
/// replaced rather than dropping the whole field.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let fields: Vec<String> = headers
        .get_all(header::COOKIE)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .filter(|v| !v.is_empty())
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_no_cookie_header() {
        assert_eq!(cookie_header(&HeaderMap::new()), None);
    }

    #[test]
    fn test_single_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("a=1; b=2"));
        assert_eq!(cookie_header(&headers).as_deref(), Some("a=1; b=2"));
    }

    #[test]
    fn test_split_cookie_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("session-token=valid"));
        assert_eq!(
            cookie_header(&headers).as_deref(),
            Some("theme=dark; session-token=valid")
        );
    }

    #[test]
    fn test_opaque_bytes_are_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"name=caf\xe9; session-token=valid").unwrap(),
        );
        let cookie = cookie_header(&headers).unwrap();
        assert!(cookie.contains("session-token=valid"));
        assert!(cookie.starts_with("name=caf"));
    }
}
