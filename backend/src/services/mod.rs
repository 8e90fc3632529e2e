//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod assistant;
pub mod recipe;
pub mod user;
pub mod workout;

pub use assistant::AssistantService;
pub use recipe::RecipeService;
pub use user::UserService;
pub use workout::WorkoutService;

use crate::db::is_foreign_key_violation_any;
use crate::error::ApiError;

/// Map an insert failure for an owned record.
///
/// A still-valid token can outlive its account; the insert then trips the
/// `user_id` foreign key and the caller is treated as unauthenticated.
pub(crate) fn owned_insert_error(err: anyhow::Error) -> ApiError {
    if is_foreign_key_violation_any(&err) {
        ApiError::Unauthorized("User not found".to_string())
    } else {
        ApiError::Internal(err)
    }
}
