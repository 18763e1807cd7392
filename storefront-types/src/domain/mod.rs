//! Domain models for the storefront.

pub mod payments;
pub mod runtime;
pub mod session;

pub use payments::{PaymentsConfig, PaymentsCredentials, PaymentsEnvironment};
pub use runtime::RuntimeMode;
pub use session::Session;
