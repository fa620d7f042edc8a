//! Order service: validation, pricing, and user lookups on top of the stores

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::order::{validate_items, NewOrder, Order, OrderId, OrderRepository, OrderStatus};
use crate::domain::pricing::LineItem;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct CreateOrderRequest {
    pub items: Vec<LineItem>,
}

/// A user together with a summary of their orders
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub order_count: usize,
    /// Sum of totals over orders that were not cancelled
    pub total_spent: f64,
}

#[derive(Debug)]
pub struct OrderService<O: OrderRepository, U: UserRepository> {
    orders: Arc<O>,
    users: Arc<U>,
}

impl<O: OrderRepository, U: UserRepository> OrderService<O, U> {
    pub fn new(orders: Arc<O>, users: Arc<U>) -> Self {
        Self { orders, users }
    }

    /// Place a pending order for an existing user
    pub async fn create(
        &self,
        user_id: UserId,
        request: CreateOrderRequest,
    ) -> Result<Order, DomainError> {
        validate_items(&request.items).map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.users.exists(user_id).await? {
            return Err(user_not_found(user_id));
        }

        let order = self
            .orders
            .create(NewOrder {
                user_id,
                items: request.items,
            })
            .await?;

        info!(
            order_id = %order.id(),
            user_id = %user_id,
            total = order.total(),
            "Created order"
        );
        Ok(order)
    }

    pub async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        self.orders.get(id).await
    }

    /// All orders, or only those with the given status
    pub async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, DomainError> {
        match status {
            Some(status) => self.orders.list_by_status(status).await,
            None => self.orders.list().await,
        }
    }

    /// Orders placed by a user; unknown users simply have none
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        self.orders.list_by_user(user_id).await
    }

    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, DomainError> {
        let order = self
            .orders
            .set_status(id, status)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Order '{}' not found", id)))?;

        info!(order_id = %id, status = %status, "Updated order status");
        Ok(order)
    }

    /// The user's record with their order count and spend
    pub async fn profile(&self, user_id: UserId) -> Result<UserProfile, DomainError> {
        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        let orders = self.orders.list_by_user(user_id).await?;
        let total_spent = orders
            .iter()
            .filter(|o| o.status() != OrderStatus::Cancelled)
            .map(Order::total)
            .sum();

        debug!(user_id = %user_id, orders = orders.len(), "Built user profile");

        Ok(UserProfile {
            user,
            order_count: orders.len(),
            total_spent,
        })
    }
}

fn user_not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}
