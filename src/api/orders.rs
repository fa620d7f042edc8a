//! Order and user profile endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::users::parse_user_id;
use crate::domain::dates::format_date;
use crate::domain::order::{Order, OrderId, OrderStatus};
use crate::domain::pricing::{format_currency, LineItem};
use crate::infrastructure::order::{CreateOrderRequest, UserProfile};

pub fn create_orders_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/{order_id}", get(get_order))
        .route("/orders/{order_id}/status", put(update_order_status))
        .route(
            "/users/{user_id}/orders",
            get(list_user_orders).post(create_order),
        )
        .route("/users/{user_id}/profile", get(get_user_profile))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderApiRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusApiRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderFilter {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub user_id: u64,
    pub items: Vec<LineItem>,
    pub items_count: usize,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
    pub total_display: String,
    pub status: OrderStatus,
    pub created_at: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        let amounts = order.amounts();

        Self {
            order_id: order.id().to_string(),
            user_id: order.user_id().value(),
            items: order.items().to_vec(),
            items_count: order.items().len(),
            subtotal: amounts.subtotal,
            tax: amounts.tax,
            discount: amounts.discount,
            total: amounts.total,
            total_display: format_currency(amounts.total),
            status: order.status(),
            created_at: order.created_at().to_rfc3339(),
        }
    }
}

/// Order as returned right after it is placed, with the buyer's details
#[derive(Debug, Clone, Serialize)]
pub struct CreatedOrderResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub count: usize,
}

impl From<Vec<Order>> for ListOrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        let orders: Vec<OrderResponse> = orders.iter().map(OrderResponse::from).collect();
        let count = orders.len();
        Self { orders, count }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub member_since: String,
    pub order_count: usize,
    pub total_spent: f64,
    pub total_spent_display: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let user = profile.user;

        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().map(String::from),
            created_at: user.created_at().to_rfc3339(),
            member_since: format_date(user.created_at()),
            order_count: profile.order_count,
            total_spent: profile.total_spent,
            total_spent_display: format_currency(profile.total_spent),
        }
    }
}

fn parse_order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse::<OrderId>()
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("order_id"))
}

fn parse_status(raw: &str) -> Result<OrderStatus, ApiError> {
    raw.parse::<OrderStatus>()
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("status"))
}

/// GET /api/orders?status=
pub async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let status = filter.status.as_deref().map(parse_status).transpose()?;
    debug!(status = ?status, "Listing orders");

    let orders = state.order_service.list(status).await?;

    Ok(Json(ListOrdersResponse::from(orders)))
}

/// GET /api/orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&order_id)?;

    let order = state
        .order_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Order '{}' not found", id)))?;

    Ok(Json(OrderResponse::from(&order)))
}

/// PUT /api/orders/{order_id}/status
pub async fn update_order_status(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(order_id): Path<String>,
    Json(request): Json<UpdateOrderStatusApiRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&order_id)?;
    let raw_status = request
        .status
        .ok_or_else(|| ApiError::bad_request("status required").with_param("status"))?;
    let status = parse_status(&raw_status)?;
    debug!(order_id = %id, status = %status, "Updating order status");

    let order = state.order_service.update_status(&id, status).await?;

    Ok(Json(OrderResponse::from(&order)))
}

/// GET /api/users/{user_id}/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;

    let orders = state.order_service.list_for_user(user_id).await?;

    Ok(Json(ListOrdersResponse::from(orders)))
}

/// POST /api/users/{user_id}/orders
pub async fn create_order(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<String>,
    Json(request): Json<CreateOrderApiRequest>,
) -> Result<(StatusCode, Json<CreatedOrderResponse>), ApiError> {
    let user_id = parse_user_id(&user_id)?;
    debug!(user_id = %user_id, items = request.items.len(), "Creating order");

    let service_request = CreateOrderRequest {
        items: request.items,
    };

    let order = state.order_service.create(user_id, service_request).await?;

    let buyer = state.user_service.get(user_id).await?;

    let response = CreatedOrderResponse {
        order: OrderResponse::from(&order),
        user_name: buyer.as_ref().map(|u| u.name().to_string()),
        user_email: buyer.as_ref().and_then(|u| u.email()).map(String::from),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/users/{user_id}/profile
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;

    let profile = state.order_service.profile(user_id).await?;

    Ok(Json(ProfileResponse::from(profile)))
}
