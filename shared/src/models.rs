//! Domain enums and derived values for workouts and recipes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calorie factor applied to workout types the server does not know about.
///
/// Only reachable through string-typed entry points (e.g. the WASM bindings);
/// every [`WorkoutType`] has its own factor.
pub const DEFAULT_CALORIE_FACTOR: f64 = 5.0;

// ============================================================================
// Workouts
// ============================================================================

/// Kind of workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Strength,
    Cardio,
    Yoga,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [WorkoutType::Strength, WorkoutType::Cardio, WorkoutType::Yoga];

    /// Canonical (stored and serialized) name
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Yoga => "Yoga",
        }
    }

    /// Calories burned per minute per intensity point
    pub fn calorie_factor(&self) -> f64 {
        match self {
            WorkoutType::Strength => 6.0,
            WorkoutType::Cardio => 8.0,
            WorkoutType::Yoga => 4.0,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(WorkoutType::Strength),
            "cardio" => Ok(WorkoutType::Cardio),
            "yoga" => Ok(WorkoutType::Yoga),
            _ => Err(format!(
                "Invalid workout_type '{}'. Must be one of: {}",
                s,
                names(&WorkoutType::ALL)
            )),
        }
    }
}

/// Estimated calories burned for a session.
///
/// `round(duration_minutes * intensity * factor)`; factor depends on the type.
pub fn calories_burned(workout_type: WorkoutType, duration_minutes: i32, intensity: i32) -> i64 {
    calories_with_factor(workout_type.calorie_factor(), duration_minutes, intensity)
}

/// Same formula as [`calories_burned`] with an explicit factor
pub fn calories_with_factor(factor: f64, duration_minutes: i32, intensity: i32) -> i64 {
    (f64::from(duration_minutes) * f64::from(intensity) * factor).round() as i64
}

// ============================================================================
// Recipes
// ============================================================================

/// Cuisine of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuisineType {
    Italian,
    Indian,
    Mexican,
    Chinese,
    Other,
}

impl CuisineType {
    pub const ALL: [CuisineType; 5] = [
        CuisineType::Italian,
        CuisineType::Indian,
        CuisineType::Mexican,
        CuisineType::Chinese,
        CuisineType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Indian => "Indian",
            CuisineType::Mexican => "Mexican",
            CuisineType::Chinese => "Chinese",
            CuisineType::Other => "Other",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuisineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "italian" => Ok(CuisineType::Italian),
            "indian" => Ok(CuisineType::Indian),
            "mexican" => Ok(CuisineType::Mexican),
            "chinese" => Ok(CuisineType::Chinese),
            "other" => Ok(CuisineType::Other),
            _ => Err(format!(
                "Invalid cuisine_type '{}'. Must be one of: {}",
                s,
                names(&CuisineType::ALL)
            )),
        }
    }
}

/// Total time in the kitchen: prep plus cook, saturating at `i32` bounds
pub fn total_cooking_time(prep_time_minutes: i32, cook_time_minutes: i32) -> i32 {
    prep_time_minutes.saturating_add(cook_time_minutes)
}

fn names<T: fmt::Display>(all: &[T]) -> String {
    all.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
