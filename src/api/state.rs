//! Application state for shared services

use std::sync::Arc;

use crate::domain::order::{Order, OrderId, OrderRepository, OrderStatus};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::order::{CreateOrderRequest, OrderService, UserProfile};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest, UserService};

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub order_service: Arc<dyn OrderServiceTrait>,
    /// Bearer token for mutating endpoints; `None` rejects every mutation
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        order_service: Arc<dyn OrderServiceTrait>,
        admin_token: Option<&str>,
    ) -> Self {
        Self {
            user_service,
            order_service,
            admin_token: admin_token.map(Arc::from),
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
    async fn search_by_name(&self, query: Option<&str>) -> Result<Vec<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }

    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        UserService::delete(self, id).await
    }

    async fn search_by_name(&self, query: Option<&str>) -> Result<Vec<User>, DomainError> {
        UserService::search_by_name(self, query).await
    }
}

/// Trait for order service operations
#[async_trait::async_trait]
pub trait OrderServiceTrait: Send + Sync {
    async fn create(
        &self,
        user_id: UserId,
        request: CreateOrderRequest,
    ) -> Result<Order, DomainError>;
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;
    async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, DomainError>;
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, DomainError>;
    async fn profile(&self, user_id: UserId) -> Result<UserProfile, DomainError>;
}

#[async_trait::async_trait]
impl<O, U> OrderServiceTrait for OrderService<O, U>
where
    O: OrderRepository + 'static,
    U: UserRepository + 'static,
{
    async fn create(
        &self,
        user_id: UserId,
        request: CreateOrderRequest,
    ) -> Result<Order, DomainError> {
        OrderService::create(self, user_id, request).await
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        OrderService::get(self, id).await
    }

    async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, DomainError> {
        OrderService::list(self, status).await
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        OrderService::list_for_user(self, user_id).await
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, DomainError> {
        OrderService::update_status(self, id, status).await
    }

    async fn profile(&self, user_id: UserId) -> Result<UserProfile, DomainError> {
        OrderService::profile(self, user_id).await
    }
}
