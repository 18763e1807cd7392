//! # Storefront Types
//!
//! Domain types and port traits shared by the storefront crates.
//! No IO lives here - only data structures, selection rules and the
//! traits that adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - `Session`, `RuntimeMode`, payments presets
//! - `ports/` - `SessionProvider`, the seam to the external auth provider
//! - `dto/` - Response bodies shared by the server and its clients
//! - `error/` - Error types per layer

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    PaymentsConfig, PaymentsCredentials, PaymentsEnvironment, RuntimeMode, Session,
};
pub use dto::*;
pub use error::{AppError, ConfigError, SessionError};
pub use ports::SessionProvider;
