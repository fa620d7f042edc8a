//! Order infrastructure module
//!
//! In-memory order store and the service that prices and validates orders
//! against the user directory.

mod repository;
mod service;

pub use repository::InMemoryOrderRepository;
pub use service::{CreateOrderRequest, OrderService, UserProfile};
