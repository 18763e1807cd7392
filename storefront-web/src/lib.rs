//! # Storefront Web
//!
//! HTTP adapter for the storefront.
//!
//! ## Architecture
//!
//! - `inbound/` - Axum server, the auth gate middleware and page handlers
//! - `outbound/` - Adapters for external services (the auth provider)
//! - `shell` - Presentational wrapper for auth forms
//! - `pages` - Static page markup
//!
//! The server is generic over `P: SessionProvider`, so the auth provider
//! can be swapped (or mocked) without touching the gate.

pub mod inbound;
pub mod outbound;
pub mod pages;
pub mod shell;

pub use inbound::HttpServer;
pub use outbound::RemoteSessionProvider;
pub use shell::AuthShell;
