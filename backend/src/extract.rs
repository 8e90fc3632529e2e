//! Request extractors

use crate::error::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` with rejections mapped to [`ApiError`], so a missing field or
/// malformed body becomes a 400 in the usual error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
