//! Payments credential presets and their selection rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::runtime::RuntimeMode;

/// Environment variable holding the test (sandbox) access token.
pub const TEST_TOKEN_VAR: &str = "PAYMENTS_TEST_ACCESS_TOKEN";
/// Environment variable holding the live (production) access token.
pub const LIVE_TOKEN_VAR: &str = "PAYMENTS_LIVE_ACCESS_TOKEN";

/// Target environment of the payments API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentsEnvironment {
    /// Test mode, paired with the test credential.
    Sandbox,
    /// Live mode, paired with the live credential.
    Production,
}

impl PaymentsEnvironment {
    /// Returns the environment label sent to the payments SDK.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentsEnvironment::Sandbox => "sandbox",
            PaymentsEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for PaymentsEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two credentials available to the process.
#[derive(Clone, Default)]
pub struct PaymentsCredentials {
    pub test_access_token: String,
    pub live_access_token: String,
}

impl PaymentsCredentials {
    pub fn new(test_access_token: impl Into<String>, live_access_token: impl Into<String>) -> Self {
        Self {
            test_access_token: test_access_token.into(),
            live_access_token: live_access_token.into(),
        }
    }

    /// Reads both tokens from the environment.
    ///
    /// A missing variable is read as an empty token; whether the token
    /// works is only known at the first real API call.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads both tokens through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(TEST_TOKEN_VAR).unwrap_or_default(),
            lookup(LIVE_TOKEN_VAR).unwrap_or_default(),
        )
    }
}

impl fmt::Debug for PaymentsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentsCredentials")
            .field("test_access_token", &redact(&self.test_access_token))
            .field("live_access_token", &redact(&self.live_access_token))
            .finish()
    }
}

/// Resolved (credential, environment) pair used to build the payments client.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentsConfig {
    access_token: String,
    environment: PaymentsEnvironment,
}

impl PaymentsConfig {
    pub fn new(access_token: impl Into<String>, environment: PaymentsEnvironment) -> Self {
        Self {
            access_token: access_token.into(),
            environment,
        }
    }

    /// Selects the preset for the given runtime mode.
    ///
    /// Development gets the test token with [`PaymentsEnvironment::Sandbox`];
    /// every other mode gets the live token with [`PaymentsEnvironment::Production`].
    pub fn resolve(mode: &RuntimeMode, credentials: &PaymentsCredentials) -> Self {
        match mode {
            RuntimeMode::Development => Self::new(
                credentials.test_access_token.clone(),
                PaymentsEnvironment::Sandbox,
            ),
            RuntimeMode::Other(_) => Self::new(
                credentials.live_access_token.clone(),
                PaymentsEnvironment::Production,
            ),
        }
    }

    /// Resolves the preset from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(&RuntimeMode::from_env(), &PaymentsCredentials::from_env())
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn environment(&self) -> PaymentsEnvironment {
        self.environment
    }

    /// Token with everything but the last four characters masked.
    pub fn redacted_token(&self) -> String {
        redact(&self.access_token)
    }
}

impl fmt::Debug for PaymentsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentsConfig")
            .field("access_token", &self.redacted_token())
            .field("environment", &self.environment)
            .finish()
    }
}

fn redact(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> PaymentsCredentials {
        PaymentsCredentials::new("sandbox-token-1234", "live-token-5678")
    }

    #[test]
    fn test_development_selects_test_preset() {
        let config = PaymentsConfig::resolve(&RuntimeMode::Development, &credentials());
        assert_eq!(config.access_token(), "sandbox-token-1234");
        assert_eq!(config.environment(), PaymentsEnvironment::Sandbox);
        assert_eq!(config.environment().label(), "sandbox");
    }

    #[test]
    fn test_other_modes_select_live_preset() {
        for mode in ["production", "test", ""] {
            let mode = RuntimeMode::from_value(Some(mode));
            let config = PaymentsConfig::resolve(&mode, &credentials());
            assert_eq!(config.access_token(), "live-token-5678");
            assert_eq!(config.environment(), PaymentsEnvironment::Production);
        }

        let config = PaymentsConfig::resolve(&RuntimeMode::from_value(None), &credentials());
        assert_eq!(config.environment().label(), "production");
    }

    #[test]
    fn test_debug_does_not_leak_tokens() {
        let config = PaymentsConfig::resolve(&RuntimeMode::Development, &credentials());
        let debug = format!("{:?} {:?}", config, credentials());
        assert!(!debug.contains("sandbox-token"));
        assert!(!debug.contains("live-token"));
        assert!(debug.contains("****1234"));
    }

    #[test]
    fn test_short_tokens_fully_masked() {
        let config = PaymentsConfig::new("abc", PaymentsEnvironment::Sandbox);
        assert_eq!(config.redacted_token(), "****");
    }

    #[test]
    fn test_environment_serde_labels() {
        assert_eq!(
            serde_json::to_string(&PaymentsEnvironment::Production).unwrap(),
            "\"production\""
        );
        let env: PaymentsEnvironment = serde_json::from_str("\"sandbox\"").unwrap();
        assert_eq!(env, PaymentsEnvironment::Sandbox);
    }
}
