//! API middleware components

pub mod auth;
pub mod logging;

pub use auth::RequireAdmin;
pub use logging::{logging_middleware, redact_headers};
