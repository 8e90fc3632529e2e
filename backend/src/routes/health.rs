//! Health probes
//!
//! `/health` and `/health/live` answer as long as the process runs;
//! `/health/ready` also pings the database and reports whether the AI
//! assistant is configured. Only the database decides readiness, since
//! the assistant degrades to fallbacks on its own.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: DependencyStatus,
    pub ai: DependencyStatus,
}

#[derive(Debug, Serialize)]
pub struct DependencyStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DependencyStatus {
    fn new(status: &'static str) -> Self {
        Self { status, message: None }
    }
}

fn respond(status: &'static str, checks: Option<ReadinessChecks>) -> HealthResponse {
    HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks,
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(respond("healthy", None))
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(respond("alive", None))
}

/// GET /health/ready, 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match db::health_check(state.db()).await {
        Ok(()) => DependencyStatus::new("healthy"),
        Err(e) => DependencyStatus {
            status: "unhealthy",
            message: Some(e.to_string()),
        },
    };
    let ai = DependencyStatus::new(if state.ai().is_enabled() { "enabled" } else { "disabled" });

    let ready = database.status == "healthy";
    let response = respond(
        if ready { "ready" } else { "not_ready" },
        Some(ReadinessChecks { database, ai }),
    );

    if ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
