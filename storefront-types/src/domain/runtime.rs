//! Process-wide runtime mode.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Environment variables consulted for the runtime mode, in order.
pub const RUNTIME_MODE_VARS: [&str; 2] = ["APP_ENV", "NODE_ENV"];

const DEVELOPMENT: &str = "development";

/// Distinguishes development execution from everything else.
///
/// Only the exact value `development` selects [`RuntimeMode::Development`].
/// Any other value, including an unset variable, is kept verbatim in
/// [`RuntimeMode::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Other(String),
}

impl RuntimeMode {
    /// Builds the mode from an optional raw flag value.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(DEVELOPMENT) => RuntimeMode::Development,
            Some(other) => RuntimeMode::Other(other.to_string()),
            None => RuntimeMode::Other(String::new()),
        }
    }

    /// Reads the mode through `lookup`, trying `APP_ENV` then `NODE_ENV`.
    ///
    /// A variable set to the empty string counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = RUNTIME_MODE_VARS
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.is_empty()));
        Self::from_value(value.as_deref())
    }

    /// Reads the mode from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

impl FromStr for RuntimeMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(Some(s)))
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Development => f.write_str(DEVELOPMENT),
            RuntimeMode::Other(v) if v.is_empty() => f.write_str("(unset)"),
            RuntimeMode::Other(v) => f.write_str(v),
        }
    }
}
