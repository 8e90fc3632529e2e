//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod recipe;
pub mod user;
pub mod workout;

pub use recipe::{CreateRecipe, RecipeFilter, RecipeRecord, RecipeRepository, UpdateRecipe};
pub use user::{UserRecord, UserRepository};
pub use workout::{CreateWorkout, UpdateWorkout, WorkoutFilter, WorkoutRecord, WorkoutRepository};
