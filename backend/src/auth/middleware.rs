//! Authenticated-user extractor
//!
//! Handlers that take an [`AuthUser`] argument require a valid
//! `Authorization: Bearer <access token>` header; anything else is a 401.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated user extracted from the access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(parts)?;

        let claims = app_state
            .jwt()
            .validate_access_token(token)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        Ok(AuthUser { user_id })
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))
}
