//! User directory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{User, UserId};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Create the `/users` router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/search", get(search_users))
        .route("/users/count", get(count_users))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Request to create a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to update a user. An empty `email` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().map(String::from),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub count: usize,
}

impl From<Vec<User>> for ListUsersResponse {
    fn from(users: Vec<User>) -> Self {
        let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
        let count = users.len();
        Self { users, count }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
    pub id: u64,
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(|e| {
        ApiError::bad_request(format!("Invalid user ID '{}': {}", raw, e)).with_param("id")
    })
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(ListUsersResponse::from(users)))
}

/// GET /api/users/search?q=
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!(query = ?params.q, "Searching users");

    let users = state.user_service.search_by_name(params.q.as_deref()).await?;

    Ok(Json(ListUsersResponse::from(users)))
}

/// GET /api/users/count
pub async fn count_users(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = state.user_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Getting user");

    let user = state
        .user_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(name = ?request.name, "Creating user");

    let service_request = CreateUserRequest {
        name: request.name.unwrap_or_default(),
        email: request.email,
    };

    let user = state.user_service.create(service_request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Updating user");

    let service_request = UpdateUserRequest {
        name: request.name,
        email: request.email,
    };

    let user = state.user_service.update(id, service_request).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Deleting user");

    if !state.user_service.delete(id).await? {
        return Err(ApiError::not_found(format!("User '{}' not found", id)));
    }

    Ok(Json(DeleteUserResponse {
        deleted: true,
        id: id.value(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let request: CreateUserApiRequest =
            serde_json::from_str(r#"{"name":"Carol","email":"carol@example.com"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Carol"));
        assert_eq!(request.email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request: CreateUserApiRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateUserApiRequest =
            serde_json::from_str(r#"{"name":"Bobby"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Bobby"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("7").unwrap().value(), 7);

        for raw in ["0", "abc", "-3", "1.5"] {
            let err = parse_user_id(raw).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.response.error.param.as_deref(), Some("id"));
        }
    }

    #[test]
    fn test_user_response_from() {
        let user = User::new(UserId::first(), "Alice", Some("alice@example.com".into()));
        let response = UserResponse::from(&user);

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Alice");
        assert_eq!(response.email.as_deref(), Some("alice@example.com"));
        assert!(response.updated_at.is_none());
    }

    #[test]
    fn test_user_response_serializes_null_email() {
        let user = User::new(UserId::new(2).unwrap(), "Bob", None);
        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();

        assert!(json.contains("\"email\":null"));
        assert!(json.contains("\"updated_at\":null"));
    }

    #[test]
    fn test_list_response_counts() {
        let users = vec![
            User::new(UserId::first(), "Alice", None),
            User::new(UserId::new(2).unwrap(), "Bob", None),
        ];

        let response = ListUsersResponse::from(users);
        assert_eq!(response.count, 2);
        assert_eq!(response.users[1].name, "Bob");
    }
}
