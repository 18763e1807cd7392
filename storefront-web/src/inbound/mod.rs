//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server serving the storefront pages.

mod auth_gate;
mod handlers;
mod server;

pub use auth_gate::auth_gate;
pub use handlers::{ApiError, AppState};
pub use server::HttpServer;
