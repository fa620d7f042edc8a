//! User infrastructure module
//!
//! This module provides the in-memory user store and the user service that
//! validates requests before they reach it.

mod repository;
mod service;

pub use repository::{seed_users, InMemoryUserRepository};
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
