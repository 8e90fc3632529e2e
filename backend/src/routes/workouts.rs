//! Workout API routes

use super::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::{AssistantService, WorkoutService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lifestyle_hub_shared::types::{
    CalorieEstimate, CalorieEstimateRequest, CreateWorkoutRequest, MessageResponse,
    UpdateWorkoutRequest, WorkoutListQuery, WorkoutPage, WorkoutResponse, WorkoutSuggestion,
    WorkoutSuggestionRequest,
};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_workout).get(list_workouts))
        .route("/suggestion", post(suggest_workout))
        .route("/estimate-calories", post(estimate_calories))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

/// POST /workouts
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /workouts?workout_type=&q=&page=&per_page=
async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WorkoutListQuery>,
) -> ApiResult<Json<WorkoutPage>> {
    let page = WorkoutService::list(state.db(), auth.user_id, &query).await?;
    Ok(Json(page))
}

/// GET /workouts/:id
async fn get_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::get(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(Json(workout))
}

/// PUT /workouts/:id
async fn update_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateWorkoutRequest>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::update(state.db(), auth.user_id, parse_id(&id)?, req).await?;
    Ok(Json(workout))
}

/// DELETE /workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    WorkoutService::delete(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("Workout deleted successfully")))
}

/// POST /workouts/suggestion
async fn suggest_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<WorkoutSuggestionRequest>,
) -> ApiResult<Json<WorkoutSuggestion>> {
    let suggestion =
        AssistantService::suggest_workout(state.db(), state.ai(), auth.user_id, req).await?;
    Ok(Json(suggestion))
}

/// POST /workouts/estimate-calories
async fn estimate_calories(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiJson(req): ApiJson<CalorieEstimateRequest>,
) -> ApiResult<Json<CalorieEstimate>> {
    let estimate = AssistantService::estimate_calories(state.ai(), req).await?;
    Ok(Json(estimate))
}
