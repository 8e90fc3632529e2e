//! Lifestyle Hub Shared Library
//!
//! Domain enums, derived values, pagination math and API types used by
//! the backend and the WASM module.

pub mod models;
pub mod pagination;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{calories_burned, total_cooking_time, CuisineType, WorkoutType};
pub use pagination::Pagination;
pub use types::*;
