//! Opaque session handed out by the external auth provider.

use serde_json::Value;

use crate::error::SessionError;

/// Proof of authentication supplied by the auth provider.
///
/// The storefront never reads fields from it; only its presence matters.
/// The raw provider payload is kept so callers further down the line can
/// hand it back to the provider unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    payload: Value,
}

impl Session {
    /// Wraps a provider payload as a session.
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Interprets a session endpoint body.
    ///
    /// `null` and `{}` mean "no session"; any other object is a session.
    /// Arrays, strings, numbers and booleans are not valid answers.
    pub fn from_provider_body(body: Value) -> Result<Option<Self>, SessionError> {
        match &body {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            Value::Object(_) => Ok(Some(Self::new(body))),
            other => Err(SessionError::Decode(format!(
                "expected a JSON object or null, got {}",
                other
            ))),
        }
    }

    /// Returns the raw provider payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}
