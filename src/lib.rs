//! User Directory Service
//!
//! CRUD and name search over an in-memory collection of user records,
//! served over HTTP, plus small pricing and date helpers.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::order::{InMemoryOrderRepository, OrderService};
use infrastructure::user::{InMemoryUserRepository, UserService};
use tracing::{info, warn};

/// Build the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let users = Arc::new(if config.directory.seed {
        info!("Seeding user directory with default records");
        InMemoryUserRepository::seeded()
    } else {
        InMemoryUserRepository::new()
    });

    let user_service = UserService::new(users.clone());
    let order_service = OrderService::new(Arc::new(InMemoryOrderRepository::new()), users);
    let admin_token = config.auth.token();

    if admin_token.is_none() {
        warn!("No admin token configured; every mutating request will be rejected");
    }

    AppState::new(Arc::new(user_service), Arc::new(order_service), admin_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_seeded() {
        let state = create_app_state(&AppConfig::default());

        assert_eq!(state.user_service.count().await.unwrap(), 2);
        assert!(state.order_service.list(None).await.unwrap().is_empty());
        assert!(state.admin_token.is_none());
    }

    #[tokio::test]
    async fn test_create_app_state_empty_with_token() {
        let mut config = AppConfig::default();
        config.directory.seed = false;
        config.auth.admin_token = Some("secret".to_string());

        let state = create_app_state(&config);

        assert_eq!(state.user_service.count().await.unwrap(), 0);
        assert_eq!(state.admin_token.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_orders_see_directory_users() {
        use crate::domain::pricing::LineItem;
        use crate::domain::user::UserId;
        use crate::infrastructure::order::CreateOrderRequest;
        use crate::infrastructure::user::CreateUserRequest;

        let state = create_app_state(&AppConfig::default());
        let carol = state
            .user_service
            .create(CreateUserRequest {
                name: "Carol".to_string(),
                email: None,
            })
            .await
            .unwrap();

        let request = CreateOrderRequest {
            items: vec![LineItem::new(10.0, 1.0)],
        };
        let order = state.order_service.create(carol.id(), request).await.unwrap();
        assert_eq!(order.user_id(), carol.id());

        let profile = state.order_service.profile(UserId::first()).await.unwrap();
        assert_eq!(profile.user.name(), "Alice");
    }
}
