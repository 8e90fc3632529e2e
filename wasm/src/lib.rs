//! Lifestyle Hub WASM Module
//!
//! WebAssembly bindings for the derived values so a browser form can preview
//! what the server will compute before a record is saved.

use lifestyle_hub_shared::models::{self, WorkoutType, DEFAULT_CALORIE_FACTOR};
use wasm_bindgen::prelude::*;

/// Estimated calories burned for a workout.
///
/// `workout_type` is matched case-insensitively; unknown types use the
/// default factor of 5.0.
#[wasm_bindgen]
pub fn calculate_calories_burned(workout_type: &str, duration_minutes: i32, intensity: i32) -> i64 {
    match workout_type.parse::<WorkoutType>() {
        Ok(t) => models::calories_burned(t, duration_minutes, intensity),
        Err(_) => models::calories_with_factor(DEFAULT_CALORIE_FACTOR, duration_minutes, intensity),
    }
}

/// Total cooking time (prep + cook) in minutes
#[wasm_bindgen]
pub fn calculate_total_cooking_time(prep_time_minutes: i32, cook_time_minutes: i32) -> i32 {
    models::total_cooking_time(prep_time_minutes, cook_time_minutes)
}

/// Known workout types as a JSON array, for populating select boxes
#[wasm_bindgen]
pub fn workout_types_json() -> String {
    let names: Vec<&str> = WorkoutType::ALL.iter().map(|t| t.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_known_type() {
        assert_eq!(calculate_calories_burned("cardio", 30, 2), 480);
    }

    #[test]
    fn test_calories_unknown_type_uses_default_factor() {
        assert_eq!(calculate_calories_burned("pilates", 30, 2), 300);
    }

    #[test]
    fn test_total_cooking_time() {
        assert_eq!(calculate_total_cooking_time(10, 25), 35);
    }

    #[test]
    fn test_total_cooking_time_does_not_overflow() {
        assert_eq!(calculate_total_cooking_time(i32::MAX, 10), i32::MAX);
        assert_eq!(calculate_total_cooking_time(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_workout_types_json() {
        assert_eq!(workout_types_json(), r#"["Strength","Cardio","Yoga"]"#);
    }
}
