//! API error type and its JSON body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Error categories reported to clients; each has a default status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    PermissionError,
    NotFoundError,
    ServerError,
}

impl ApiErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequestError => "invalid_request_error",
            Self::AuthenticationError => "authentication_error",
            Self::PermissionError => "permission_error",
            Self::NotFoundError => "not_found_error",
            Self::ServerError => "server_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequestError => StatusCode::BAD_REQUEST,
            Self::AuthenticationError => StatusCode::UNAUTHORIZED,
            Self::PermissionError => StatusCode::FORBIDDEN,
            Self::NotFoundError => StatusCode::NOT_FOUND,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error response body: `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Error returned from handlers and extractors
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Error of the given category with its default status
    pub fn of(error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status: error_type.status(),
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    /// Name the offending request parameter
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Override the category's default status
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn message(&self) -> &str {
        &self.response.error.message
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::of(ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::of(ApiErrorType::AuthenticationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::of(ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::of(ApiErrorType::NotFoundError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::of(ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

/// Validation keeps its reason text; internal details never reach the client.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Internal { message } => {
                error!(error = %message, "Unexpected failure while handling request");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.response.error.error_type, self.status, self.message())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults() {
        let cases = [
            (ApiError::bad_request("x"), StatusCode::BAD_REQUEST, "invalid_request_error"),
            (ApiError::unauthorized("x"), StatusCode::UNAUTHORIZED, "authentication_error"),
            (ApiError::forbidden("x"), StatusCode::FORBIDDEN, "permission_error"),
            (ApiError::not_found("x"), StatusCode::NOT_FOUND, "not_found_error"),
            (ApiError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
        ];

        for (err, status, kind) in cases {
            assert_eq!(err.status, status);
            assert_eq!(err.response.error.error_type.as_str(), kind);
        }
    }

    #[test]
    fn test_builders() {
        let err = ApiError::bad_request("Invalid user ID")
            .with_param("id")
            .with_code("invalid_id")
            .with_status(StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.response.error.param.as_deref(), Some("id"));
        assert_eq!(err.response.error.code.as_deref(), Some("invalid_id"));
        assert_eq!(
            err.to_string(),
            "invalid_request_error (422 Unprocessable Entity): Invalid user ID"
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        let validation: ApiError = DomainError::validation("invalid email format").into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.message(), "invalid email format");

        let missing: ApiError = DomainError::not_found("User '9' not found").into();
        assert_eq!(missing.status, StatusCode::NOT_FOUND);

        let internal: ApiError = DomainError::internal("lock poisoned at line 12").into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message(), "Internal server error");
    }

    #[test]
    fn test_body_shape() {
        let err = ApiError::unauthorized("Unauthorized - Missing or invalid token");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["error"]["type"], "authentication_error");
        assert_eq!(json["error"]["message"], "Unauthorized - Missing or invalid token");
        assert!(json["error"].get("param").is_none());
        assert!(json["error"].get("code").is_none());
    }
}
