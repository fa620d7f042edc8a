//! Admin token authentication for mutating endpoints

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires `Authorization: Bearer <admin token>`
///
/// With no admin token configured every request is refused.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized - Missing or invalid token"))?;

        let Some(expected) = state.admin_token.as_deref() else {
            warn!("Rejected mutating request: no admin token configured");
            return Err(ApiError::forbidden("Forbidden - Invalid token"));
        };

        if !constant_time_compare(token, expected) {
            debug!("Rejected request with wrong admin token");
            return Err(ApiError::forbidden("Forbidden - Invalid token"));
        }

        Ok(RequireAdmin)
    }
}

/// Compare without short-circuiting on the first differing byte
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
