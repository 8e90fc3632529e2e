//! AI assistant: workout suggestions, calorie estimates and shopping lists
//!
//! Each operation builds a prompt, asks the completion client and parses
//! the reply. Any provider failure (disabled client, network error, non-2xx,
//! reply without usable JSON) produces a locally built payload tagged
//! `source: "fallback"` instead of an error.

use crate::ai::{extract_json, CompletionClient};
use crate::error::ApiError;
use crate::repositories::RecipeRecord;
use crate::services::{RecipeService, WorkoutService};
use crate::services::workout::parse_workout_type;
use lifestyle_hub_shared::types::{
    AssistantSource, CalorieEstimate, CalorieEstimateRequest, ShoppingList, ShoppingListItem,
    ShoppingListRequest, SuggestedExercise, WorkoutResponse, WorkoutSuggestion,
    WorkoutSuggestionRequest,
};
use lifestyle_hub_shared::{calories_burned, WorkoutType};
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

/// Workouts embedded in the suggestion prompt
const HISTORY_LIMIT: i64 = 5;

/// Upper bound for an AI calorie estimate to be taken seriously
const MAX_PLAUSIBLE_CALORIES: f64 = 20_000.0;

/// AI assistant operations
pub struct AssistantService;

impl AssistantService {
    /// Suggest a workout of the given type based on the user's recent history
    pub async fn suggest_workout(
        pool: &PgPool,
        ai: &dyn CompletionClient,
        user_id: Uuid,
        req: WorkoutSuggestionRequest,
    ) -> Result<WorkoutSuggestion, ApiError> {
        let workout_type = parse_workout_type(&req.workout_type)?;
        let history = WorkoutService::recent(pool, user_id, HISTORY_LIMIT).await?;

        Ok(suggest_from_history(ai, workout_type, &history).await)
    }

    /// Estimate calories for a described session
    pub async fn estimate_calories(
        ai: &dyn CompletionClient,
        req: CalorieEstimateRequest,
    ) -> Result<CalorieEstimate, ApiError> {
        req.validate()?;
        let workout_type = parse_workout_type(&req.workout_type)?;

        let prompt = calorie_prompt(workout_type, &req);
        match ask(ai, &prompt, "calorie estimate").await.and_then(|r| parse_calories(&r)) {
            Some(calories) => Ok(CalorieEstimate {
                calories,
                source: AssistantSource::Ai,
            }),
            None => Ok(CalorieEstimate {
                calories: calories_burned(workout_type, req.duration_minutes, req.intensity),
                source: AssistantSource::Fallback,
            }),
        }
    }

    /// Build a combined shopping list for some of the user's recipes
    pub async fn shopping_list(
        pool: &PgPool,
        ai: &dyn CompletionClient,
        user_id: Uuid,
        req: ShoppingListRequest,
    ) -> Result<ShoppingList, ApiError> {
        req.validate()?;
        let ids = req
            .recipe_ids
            .iter()
            .map(|id| {
                Uuid::parse_str(id.trim())
                    .map_err(|_| ApiError::BadRequest(format!("Invalid recipe id: {}", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let recipes = RecipeService::get_many(pool, user_id, &ids).await?;

        Ok(shopping_list_from_recipes(ai, &recipes).await)
    }
}

/// Run the completion and log (not propagate) failures
async fn ask(ai: &dyn CompletionClient, prompt: &str, what: &str) -> Option<String> {
    if !ai.is_enabled() {
        debug!("AI disabled, using fallback {}", what);
        return None;
    }

    match ai.complete(prompt).await {
        Ok(reply) => Some(reply),
        Err(e) => {
            warn!(error = %e, "AI {} failed, using fallback", what);
            None
        }
    }
}

// ============================================================================
// Workout suggestion
// ============================================================================

#[derive(Debug, Deserialize)]
struct SuggestionReply {
    title: String,
    exercises: Vec<SuggestedExercise>,
    #[serde(default)]
    notes: Option<String>,
}

async fn suggest_from_history(
    ai: &dyn CompletionClient,
    workout_type: WorkoutType,
    history: &[WorkoutResponse],
) -> WorkoutSuggestion {
    let prompt = suggestion_prompt(workout_type, history);

    match ask(ai, &prompt, "workout suggestion")
        .await
        .and_then(|r| parse_suggestion(&r))
    {
        Some(suggestion) => suggestion,
        None => fallback_suggestion(workout_type),
    }
}

fn suggestion_prompt(workout_type: WorkoutType, history: &[WorkoutResponse]) -> String {
    let mut prompt = format!(
        "Suggest a new {} workout for me. Provide 3-4 exercises with sets and reps.\n",
        workout_type
    );

    if history.is_empty() {
        prompt.push_str("I have no recorded workouts yet.\n");
    } else {
        prompt.push_str(&format!("My {} most recent workouts:\n", history.len()));
        for w in history {
            prompt.push_str(&format!(
                "- {}: {} minutes, intensity {}/5, goal {}{}\n",
                w.workout_type,
                w.duration_minutes,
                w.intensity,
                if w.goal_achieved { "achieved" } else { "not achieved" },
                w.notes
                    .as_deref()
                    .map(|n| format!(", notes: {}", n))
                    .unwrap_or_default(),
            ));
        }
    }

    prompt.push_str(
        "Respond with JSON only, shaped as \
         {\"title\": string, \"exercises\": [{\"name\": string, \"details\": string}], \"notes\": string}.",
    );
    prompt
}

fn parse_suggestion(reply: &str) -> Option<WorkoutSuggestion> {
    let parsed: SuggestionReply = serde_json::from_str(extract_json(reply)).ok()?;

    let exercises: Vec<SuggestedExercise> = parsed
        .exercises
        .into_iter()
        .filter(|e| !e.name.trim().is_empty())
        .collect();
    if parsed.title.trim().is_empty() || exercises.is_empty() {
        return None;
    }

    Some(WorkoutSuggestion {
        title: parsed.title,
        exercises,
        notes: parsed.notes.unwrap_or_default(),
        source: AssistantSource::Ai,
    })
}

fn fallback_suggestion(workout_type: WorkoutType) -> WorkoutSuggestion {
    let (title, exercises, notes): (&str, [(&str, &str); 4], &str) = match workout_type {
        WorkoutType::Strength => (
            "Strength Session Suggestion",
            [
                ("Barbell Squats", "3 sets of 8-10 reps"),
                ("Bench Press", "3 sets of 8-10 reps"),
                ("Deadlifts", "1 set of 5 reps"),
                ("Overhead Press", "3 sets of 10-12 reps"),
            ],
            "Focus on proper form. Rest 90 seconds between sets.",
        ),
        WorkoutType::Cardio => (
            "Cardio Session Suggestion",
            [
                ("Warm-up Jog", "5 minutes at a light pace"),
                ("Interval Sprints", "8 rounds of 30 seconds sprint, 60 seconds walk"),
                ("Steady-State Cycling", "20 minutes at a moderate pace"),
                ("Cool-down Walk", "5 minutes"),
            ],
            "Stay hydrated and monitor your heart rate.",
        ),
        WorkoutType::Yoga => (
            "Yoga Flow Suggestion",
            [
                ("Sun Salutation A", "5 rounds"),
                ("Warrior II Pose", "Hold for 5 breaths on each side"),
                ("Triangle Pose", "Hold for 5 breaths on each side"),
                ("Savasana (Corpse Pose)", "5-10 minutes of relaxation"),
            ],
            "Focus on your breath and move with intention.",
        ),
    };

    WorkoutSuggestion {
        title: title.to_string(),
        exercises: exercises
            .iter()
            .map(|(name, details)| SuggestedExercise {
                name: name.to_string(),
                details: details.to_string(),
            })
            .collect(),
        notes: notes.to_string(),
        source: AssistantSource::Fallback,
    }
}

// ============================================================================
// Calorie estimate
// ============================================================================

#[derive(Debug, Deserialize)]
struct CaloriesReply {
    calories: f64,
}

fn calorie_prompt(workout_type: WorkoutType, req: &CalorieEstimateRequest) -> String {
    let mut prompt = format!(
        "Estimate the calories burned in a {} minute {} workout at intensity {} on a 1-5 scale.",
        req.duration_minutes, workout_type, req.intensity
    );
    if let Some(notes) = req.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        prompt.push_str(&format!(" Session notes: {}.", notes));
    }
    prompt.push_str(" Respond with JSON only, shaped as {\"calories\": number}.");
    prompt
}

/// Accepts `{"calories": n}` or a bare number
fn parse_calories(reply: &str) -> Option<i64> {
    let json = extract_json(reply);
    let value = serde_json::from_str::<CaloriesReply>(json)
        .map(|r| r.calories)
        .or_else(|_| json.trim().parse::<f64>())
        .ok()?;

    (value.is_finite() && value > 0.0 && value <= MAX_PLAUSIBLE_CALORIES)
        .then(|| value.round() as i64)
}

// ============================================================================
// Shopping list
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShoppingReply {
    Full {
        items: Vec<ShoppingListItem>,
        #[serde(default)]
        notes: Option<String>,
    },
    Items(Vec<ShoppingListItem>),
}

async fn shopping_list_from_recipes(
    ai: &dyn CompletionClient,
    recipes: &[RecipeRecord],
) -> ShoppingList {
    let prompt = shopping_prompt(recipes);

    match ask(ai, &prompt, "shopping list")
        .await
        .and_then(|r| parse_shopping_list(&r))
    {
        Some(list) => list,
        None => fallback_shopping_list(recipes),
    }
}

fn shopping_prompt(recipes: &[RecipeRecord]) -> String {
    let mut prompt = String::from(
        "Combine the ingredients of these recipes into one shopping list, \
         merging duplicates and summing quantities where possible.\n",
    );
    for r in recipes {
        prompt.push_str(&format!("- {}: {}\n", r.recipe_name, r.ingredients.replace('\n', ", ")));
    }
    prompt.push_str(
        "Respond with JSON only, shaped as \
         {\"items\": [{\"name\": string, \"quantity\": string}], \"notes\": string}.",
    );
    prompt
}

fn parse_shopping_list(reply: &str) -> Option<ShoppingList> {
    let (items, notes) = match serde_json::from_str::<ShoppingReply>(extract_json(reply)).ok()? {
        ShoppingReply::Full { items, notes } => (items, notes.unwrap_or_default()),
        ShoppingReply::Items(items) => (items, String::new()),
    };

    let items: Vec<ShoppingListItem> = items
        .into_iter()
        .filter(|i| !i.name.trim().is_empty())
        .collect();
    if items.is_empty() {
        return None;
    }

    Some(ShoppingList {
        items,
        notes,
        source: AssistantSource::Ai,
    })
}

/// Split ingredient text on commas and newlines, keeping the first spelling
/// of each case-insensitive duplicate
fn fallback_shopping_list(recipes: &[RecipeRecord]) -> ShoppingList {
    let mut seen = HashSet::new();
    let items = recipes
        .iter()
        .flat_map(|r| r.ingredients.split([',', '\n']))
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .filter(|i| seen.insert(i.to_lowercase()))
        .map(|name| ShoppingListItem {
            name: name.to_string(),
            quantity: None,
        })
        .collect();

    ShoppingList {
        items,
        notes: format!(
            "Combined ingredients from {} recipe{}.",
            recipes.len(),
            if recipes.len() == 1 { "" } else { "s" }
        ),
        source: AssistantSource::Fallback,
    }
}
