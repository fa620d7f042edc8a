//! Order domain
//!
//! Orders placed by directory users: line items priced with the shared
//! pricing helpers, a generated identifier, and a status.

mod entity;
mod repository;
mod validation;

pub use entity::{
    NewOrder, Order, OrderAmounts, OrderId, OrderStatus, ORDER_DISCOUNT_PERCENT, ORDER_ID_LENGTH,
};
pub use repository::OrderRepository;
pub use validation::{validate_items, OrderValidationError};
