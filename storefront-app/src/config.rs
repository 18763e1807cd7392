//! Configuration loading from environment.

use std::env;

use storefront_types::{ConfigError, PaymentsConfig, PaymentsCredentials, RuntimeMode};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub auth_url: String,
    pub runtime_mode: RuntimeMode,
    pub payments: PaymentsConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Loads configuration through `lookup`.
    ///
    /// The payments preset is resolved here, once, from the runtime mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
            })?,
            None => 3000,
        };

        let auth_url = lookup("AUTH_URL").ok_or(ConfigError::Missing("AUTH_URL"))?;

        let runtime_mode = RuntimeMode::from_lookup(&lookup);
        let credentials = PaymentsCredentials::from_lookup(&lookup);
        let payments = PaymentsConfig::resolve(&runtime_mode, &credentials);

        Ok(Self {
            port,
            auth_url,
            runtime_mode,
            payments,
        })
    }
}
