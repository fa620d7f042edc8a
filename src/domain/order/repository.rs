//! Order repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewOrder, Order, OrderId, OrderStatus};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for order storage
///
/// Implementations assign identifiers and never hand out one already held.
#[async_trait]
pub trait OrderRepository: Send + Sync + Debug {
    /// Store a new pending order
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// All orders in creation order
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, DomainError>;

    /// Move a stored order to `status`, returning `None` when it is unknown
    ///
    /// Implementations check `OrderStatus::can_transition_to` while holding
    /// the lock that applies the change; a refused move is a validation error.
    async fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;
}
