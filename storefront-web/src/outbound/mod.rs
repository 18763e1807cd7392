//! Outbound adapters.

mod session;

pub use session::RemoteSessionProvider;
