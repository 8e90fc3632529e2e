//! Route definitions for the Lifestyle Hub API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod auth;
mod health;
mod recipes;
mod workouts;


pub use auth::auth_routes;
pub use recipes::recipe_routes;
pub use workouts::workout_routes;

/// Upper bound on a whole request, including any AI round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/auth", auth::auth_routes())
        .nest("/workouts", workouts::workout_routes())
        .nest("/recipes", recipes::recipe_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a path id; malformed ids are a 400, unknown ones a 404 later
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid id: {}", raw)))
}
