//! Infrastructure layer - Storage and process-level plumbing

pub mod logging;
pub mod order;
pub mod user;
