//! Liveness and readiness checks

use std::time::Instant;

use axum::{extract::State, http::StatusCode};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Healthy => StatusCode::OK,
            Self::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Outcome of asking the user store for its size
#[derive(Serialize, Debug)]
pub struct StoreCheck {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub latency_ms: u64,
}

#[derive(Serialize, Debug)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<StoreCheck>,
}

impl HealthReport {
    fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: VERSION,
            users: None,
        }
    }

    fn from_check(check: StoreCheck) -> Self {
        Self {
            status: check.status,
            version: VERSION,
            users: Some(check),
        }
    }
}

pub async fn health_check() -> Json<HealthReport> {
    Json(HealthReport::healthy())
}

/// 503 when the user store cannot answer
pub async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthReport::from_check(check_user_store(&state).await);
    (report.status.status_code(), Json(report))
}

pub async fn live_check() -> StatusCode {
    StatusCode::OK
}

async fn check_user_store(state: &AppState) -> StoreCheck {
    let started = Instant::now();
    let result = state.user_service.count().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(records) => StoreCheck {
            status: HealthStatus::Healthy,
            records: Some(records),
            error: None,
            latency_ms,
        },
        Err(e) => StoreCheck {
            status: HealthStatus::Unhealthy,
            records: None,
            error: Some(e.to_string()),
            latency_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HealthStatus::Healthy.status_code(), StatusCode::OK);
        assert_eq!(
            HealthStatus::Unhealthy.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_plain_report_omits_store() {
        let json = serde_json::to_value(HealthReport::healthy()).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], VERSION);
        assert!(json.get("users").is_none());
    }

    #[test]
    fn test_failed_check_marks_report_unhealthy() {
        let report = HealthReport::from_check(StoreCheck {
            status: HealthStatus::Unhealthy,
            records: None,
            error: Some("store offline".to_string()),
            latency_ms: 0,
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["users"]["error"], "store offline");
        assert!(json["users"].get("records").is_none());
    }
}
