//! API request and response types

use crate::models::{CuisineType, WorkoutType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Deserialize a field that distinguishes "absent" (`None`) from an explicit
/// `null` (`Some(None)`). Use together with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Simple message body (`{"msg": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 80, message = "Username must be 1-80 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Create workout request. `workout_type` is parsed case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    pub workout_type: String,
    #[validate(range(min = 1, max = 1440, message = "duration_minutes must be between 1 and 1440"))]
    pub duration_minutes: i32,
    #[validate(range(min = 1, max = 5, message = "intensity must be between 1 and 5"))]
    pub intensity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub goal_achieved: bool,
}

/// Partial workout update. Absent fields keep their value; `"notes": null`
/// clears the notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    #[validate(range(min = 1, max = 1440, message = "duration_minutes must be between 1 and 1440"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "intensity must be between 1 and 5"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i32>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_achieved: Option<bool>,
}

/// Workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub intensity: i32,
    pub notes: Option<String>,
    pub goal_achieved: bool,
    /// Derived: duration x intensity x type factor
    pub calories_burned: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Workout list query parameters (all optional, invalid values ignored)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutListQuery {
    pub workout_type: Option<String>,
    /// Case-insensitive substring search over notes
    pub q: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// One page of workouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPage {
    pub workouts: Vec<WorkoutResponse>,
    pub total: i64,
    pub pages: i64,
    pub current_page: u32,
    pub per_page: u32,
}

// ============================================================================
// Recipe Types
// ============================================================================

/// Create recipe request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 150, message = "recipe_name must be 1-150 characters"))]
    pub recipe_name: String,
    pub cuisine_type: String,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[validate(range(min = 0, max = 1440, message = "prep_time_minutes must be between 0 and 1440"))]
    pub prep_time_minutes: i32,
    #[validate(range(min = 0, max = 1440, message = "cook_time_minutes must be between 0 and 1440"))]
    pub cook_time_minutes: i32,
    #[validate(length(min = 1, message = "ingredients cannot be empty"))]
    pub ingredients: String,
}

/// Partial recipe update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 150, message = "recipe_name must be 1-150 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[validate(range(min = 0, max = 1440, message = "prep_time_minutes must be between 0 and 1440"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<i32>,
    #[validate(range(min = 0, max = 1440, message = "cook_time_minutes must be between 0 and 1440"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<i32>,
    #[validate(length(min = 1, message = "ingredients cannot be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

/// Recipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub recipe_name: String,
    pub cuisine_type: CuisineType,
    pub is_vegetarian: bool,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub ingredients: String,
    /// Derived: prep + cook
    pub total_cooking_time: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe list query parameters (all optional, invalid values ignored)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListQuery {
    pub cuisine_type: Option<String>,
    pub is_vegetarian: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// One page of recipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipePage {
    pub recipes: Vec<RecipeResponse>,
    pub total: i64,
    pub pages: i64,
    pub current_page: u32,
    pub per_page: u32,
}

// ============================================================================
// AI Assistant Types
// ============================================================================

/// Where an assistant payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantSource {
    /// Parsed from the AI provider's reply
    Ai,
    /// Built locally because the provider could not be used
    Fallback,
}

/// Workout suggestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSuggestionRequest {
    pub workout_type: String,
}

/// A single suggested exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedExercise {
    pub name: String,
    #[serde(default)]
    pub details: String,
}

/// Workout suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    pub title: String,
    pub exercises: Vec<SuggestedExercise>,
    pub notes: String,
    pub source: AssistantSource,
}

/// Calorie estimate request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalorieEstimateRequest {
    pub workout_type: String,
    #[validate(range(min = 1, max = 1440, message = "duration_minutes must be between 1 and 1440"))]
    pub duration_minutes: i32,
    #[validate(range(min = 1, max = 5, message = "intensity must be between 1 and 5"))]
    pub intensity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Calorie estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEstimate {
    pub calories: i64,
    pub source: AssistantSource,
}

/// Shopping list request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShoppingListRequest {
    #[validate(length(min = 1, max = 50, message = "recipe_ids must contain 1-50 ids"))]
    pub recipe_ids: Vec<String>,
}

/// Shopping list line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    /// Free-form amount; numeric values are kept as their text form
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Quantity>::deserialize(deserializer)? {
        Some(Quantity::Text(text)) => Some(text),
        Some(Quantity::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

/// Shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub notes: String,
    pub source: AssistantSource,
}
