//! In-memory order repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::order::{NewOrder, Order, OrderId, OrderRepository, OrderStatus};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of OrderRepository, kept in creation order
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered(&self, keep: impl Fn(&Order) -> bool) -> Vec<Order> {
        let orders = self.orders.read().await;
        orders.iter().filter(|o| keep(o)).cloned().collect()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;

        let id = loop {
            let candidate = OrderId::generate();
            if !orders.iter().any(|o| *o.id() == candidate) {
                break candidate;
            }
        };

        let order = Order::new(id, order);
        orders.push(order.clone());

        Ok(order)
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read().await.clone())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| o.user_id() == user_id).await)
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| o.status() == status).await)
    }

    async fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().await;

        let Some(order) = orders.iter_mut().find(|o| o.id() == id) else {
            return Ok(None);
        };

        if !order.status().can_transition_to(status) {
            return Err(DomainError::validation(format!(
                "order '{}' is {} and cannot become {}",
                id,
                order.status(),
                status
            )));
        }

        order.set_status(status);
        Ok(Some(order.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::LineItem;
    use std::collections::HashSet;

    fn new_order(user: u64) -> NewOrder {
        NewOrder {
            user_id: UserId::new(user).unwrap(),
            items: vec![LineItem::new(10.0, 1.0)],
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryOrderRepository::new();

        let order = repo.create(new_order(1)).await.unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);

        let fetched = repo.get(order.id()).await.unwrap().unwrap();
        assert_eq!(fetched, order);

        let unknown: OrderId = "zzzzzzzz".parse().unwrap();
        assert!(repo.get(&unknown).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let repo = InMemoryOrderRepository::new();

        let mut ids = HashSet::new();
        for _ in 0..100 {
            let order = repo.create(new_order(1)).await.unwrap();
            assert!(ids.insert(order.id().clone()));
        }
    }

    #[tokio::test]
    async fn test_filters_keep_creation_order() {
        let repo = InMemoryOrderRepository::new();

        let first = repo.create(new_order(1)).await.unwrap();
        let other = repo.create(new_order(2)).await.unwrap();
        let second = repo.create(new_order(1)).await.unwrap();

        let mine: Vec<OrderId> = repo
            .list_by_user(UserId::first())
            .await
            .unwrap()
            .iter()
            .map(|o| o.id().clone())
            .collect();
        assert_eq!(mine, vec![first.id().clone(), second.id().clone()]);

        repo.set_status(other.id(), OrderStatus::Completed)
            .await
            .unwrap();

        let pending = repo.list_by_status(OrderStatus::Pending).await.unwrap();
        assert_eq!(pending.len(), 2);

        let completed = repo.list_by_status(OrderStatus::Completed).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id(), other.id());

        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_set_status_rules() {
        let repo = InMemoryOrderRepository::new();
        let order = repo.create(new_order(1)).await.unwrap();

        let cancelled = repo
            .set_status(order.id(), OrderStatus::Cancelled)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);

        let err = repo
            .set_status(order.id(), OrderStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let unknown: OrderId = "00000000".parse().unwrap();
        assert!(repo
            .set_status(&unknown, OrderStatus::Completed)
            .await
            .unwrap()
            .is_none());
    }
}
