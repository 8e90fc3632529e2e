//! Authentication routes
//!
//! Registration, login, token refresh and the caller's own account.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use lifestyle_hub_shared::types::{
    AuthTokens, LoginRequest, MessageResponse, RefreshTokenRequest, RegisterRequest, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", axum::routing::get(get_profile).delete(delete_account))
}

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let profile = UserService::register(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(state.db(), state.jwt(), &req.username, &req.password).await?;
    Ok(Json(tokens))
}

/// POST /auth/refresh
async fn refresh_token(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::refresh_token(state.db(), state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// GET /auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::get_profile(state.db(), auth_user.user_id).await?;
    Ok(Json(profile))
}

/// DELETE /auth/me
///
/// Removes the account and, by cascade, its workouts and recipes.
async fn delete_account(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    UserService::delete_account(state.db(), auth_user.user_id).await?;
    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
