//! Port traits (interfaces for adapters).
//!
//! The web layer depends on these traits, not on a concrete auth provider.

mod session;

pub use session::SessionProvider;
