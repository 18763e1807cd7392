//! Session provider port.
//!
//! Session management is owned by an external auth provider. The web
//! layer only asks whether the incoming request carries a session.

use std::sync::Arc;

use crate::domain::Session;
use crate::error::SessionError;

/// Looks up the session attached to an incoming request.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    /// Returns the current session, if any.
    ///
    /// `cookie` is the raw `Cookie` header of the incoming request.
    /// Errors are returned as-is; implementations must not map a failed
    /// lookup to `Ok(None)`.
    async fn current_session(
        &self,
        cookie: Option<&str>,
    ) -> Result<Option<Session>, SessionError>;
}

#[async_trait::async_trait]
impl<P: SessionProvider + ?Sized> SessionProvider for Arc<P> {
    async fn current_session(
        &self,
        cookie: Option<&str>,
    ) -> Result<Option<Session>, SessionError> {
        (**self).current_session(cookie).await
    }
}
