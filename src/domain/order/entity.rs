//! Order entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::validation::OrderValidationError;
use crate::domain::pricing::{
    calculate_discount, calculate_tax, calculate_total, LineItem, DEFAULT_TAX_RATE,
};
use crate::domain::user::UserId;

/// Length of generated order identifiers
pub const ORDER_ID_LENGTH: usize = 8;

/// Discount granted on every order, as a percentage of the subtotal
pub const ORDER_DISCOUNT_PERCENT: f64 = 5.0;

/// Order identifier - short lowercase alphanumeric code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Random identifier of `ORDER_ID_LENGTH` characters from `[a-z0-9]`
    pub fn generate() -> Self {
        use rand::distributions::Alphanumeric;

        let id = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ORDER_ID_LENGTH)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == ORDER_ID_LENGTH
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

        if !valid {
            return Err(OrderValidationError::InvalidId(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Pending orders may move to any other status; settled ones stay put
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        *self == Self::Pending || *self == next
    }
}

impl FromStr for OrderStatus {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(OrderValidationError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money breakdown of an order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderAmounts {
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}

impl OrderAmounts {
    /// Subtotal plus default tax, minus the standard order discount
    pub fn for_items(items: &[LineItem]) -> Self {
        let subtotal = calculate_total(items);
        let tax = calculate_tax(subtotal, DEFAULT_TAX_RATE);
        let discount = calculate_discount(subtotal, ORDER_DISCOUNT_PERCENT);

        Self {
            subtotal,
            tax,
            discount,
            total: subtotal + tax - discount,
        }
    }
}

/// Validated contents of an order that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    items: Vec<LineItem>,
    amounts: OrderAmounts,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Price the items and open the order as pending
    pub fn new(id: OrderId, order: NewOrder) -> Self {
        Self {
            id,
            user_id: order.user_id,
            amounts: OrderAmounts::for_items(&order.items),
            items: order.items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn amounts(&self) -> OrderAmounts {
        self.amounts
    }

    pub fn total(&self) -> f64 {
        self.amounts.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Callers check `can_transition_to` first
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
