use thiserror::Error;

use crate::domain::pricing::{is_valid_price, LineItem};
use crate::domain::validation::is_finite_number;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("invalid order id '{0}'")]
    InvalidId(String),

    #[error("unknown order status '{0}'")]
    UnknownStatus(String),

    #[error("order requires at least one item")]
    NoItems,

    #[error("item {index} has an invalid price")]
    InvalidPrice { index: usize },

    #[error("item {index} has an invalid quantity")]
    InvalidQuantity { index: usize },
}

/// Every item needs a price in range and a positive finite quantity
pub fn validate_items(items: &[LineItem]) -> Result<(), OrderValidationError> {
    if items.is_empty() {
        return Err(OrderValidationError::NoItems);
    }

    for (index, item) in items.iter().enumerate() {
        if !is_finite_number(item.price) || !is_valid_price(item.price) {
            return Err(OrderValidationError::InvalidPrice { index });
        }

        if !is_finite_number(item.quantity) || item.quantity <= 0.0 {
            return Err(OrderValidationError::InvalidQuantity { index });
        }
    }

    Ok(())
}
