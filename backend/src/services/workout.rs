//! Workout service: validation, ownership and derived fields

use crate::error::ApiError;
use crate::services::owned_insert_error;
use crate::repositories::{
    CreateWorkout, UpdateWorkout, WorkoutFilter, WorkoutRecord, WorkoutRepository,
};
use lifestyle_hub_shared::types::{
    CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListQuery, WorkoutPage, WorkoutResponse,
};
use lifestyle_hub_shared::{calories_burned, Pagination, WorkoutType};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Default page size for workout listings
pub const WORKOUTS_PER_PAGE: u32 = 10;

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Create a workout for the user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        req.validate()?;
        let workout_type = parse_workout_type(&req.workout_type)?;

        let record = WorkoutRepository::create(
            pool,
            CreateWorkout {
                user_id,
                workout_type: workout_type.as_str().to_string(),
                duration_minutes: req.duration_minutes,
                intensity: req.intensity,
                notes: normalize_notes(req.notes),
                goal_achieved: req.goal_achieved,
            },
        )
        .await
        .map_err(owned_insert_error)?;

        info!(user_id = %user_id, workout_id = %record.id, "Workout created");
        to_response(record)
    }

    /// List the user's workouts with filters and pagination
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        query: &WorkoutListQuery,
    ) -> Result<WorkoutPage, ApiError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.per_page.as_deref(),
            WORKOUTS_PER_PAGE,
        );
        let filter = filter_from_query(query);

        let (records, total) = WorkoutRepository::list_paginated(
            pool,
            user_id,
            &filter,
            pagination.limit(),
            pagination.offset(),
        )
        .await
        .map_err(ApiError::Internal)?;

        debug!(user_id = %user_id, total, page = pagination.page, "Listed workouts");

        Ok(WorkoutPage {
            workouts: records
                .into_iter()
                .map(to_response)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            pages: pagination.total_pages(total),
            current_page: pagination.page,
            per_page: pagination.per_page,
        })
    }

    /// Get one of the user's workouts
    pub async fn get(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<WorkoutResponse, ApiError> {
        let record = WorkoutRepository::get_by_id(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(not_found)?;

        to_response(record)
    }

    /// Partially update one of the user's workouts
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: UpdateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        req.validate()?;
        let workout_type = req
            .workout_type
            .as_deref()
            .map(parse_workout_type)
            .transpose()?;

        let updates = UpdateWorkout {
            workout_type: workout_type.map(|t| t.as_str().to_string()),
            duration_minutes: req.duration_minutes,
            intensity: req.intensity,
            notes: req.notes.map(normalize_notes),
            goal_achieved: req.goal_achieved,
        };

        let record = WorkoutRepository::update(pool, user_id, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(not_found)?;

        info!(user_id = %user_id, workout_id = %id, "Workout updated");
        to_response(record)
    }

    /// Delete one of the user's workouts
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(not_found());
        }

        info!(user_id = %user_id, workout_id = %id, "Workout deleted");
        Ok(())
    }

    /// The user's most recent workouts, newest first
    pub async fn recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WorkoutResponse>, ApiError> {
        WorkoutRepository::get_recent(pool, user_id, limit)
            .await
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(to_response)
            .collect()
    }
}

/// Parse a client-supplied type name, rejecting unknown values
pub fn parse_workout_type(value: &str) -> Result<WorkoutType, ApiError> {
    value.parse::<WorkoutType>().map_err(ApiError::Validation)
}

fn not_found() -> ApiError {
    ApiError::NotFound("Workout not found".to_string())
}

/// Blank notes are stored as NULL
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}

/// Unknown type names and blank searches are ignored
fn filter_from_query(query: &WorkoutListQuery) -> WorkoutFilter {
    WorkoutFilter {
        workout_type: query
            .workout_type
            .as_deref()
            .and_then(|t| t.parse::<WorkoutType>().ok())
            .map(|t| t.as_str().to_string()),
        notes_query: query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
    }
}

fn to_response(record: WorkoutRecord) -> Result<WorkoutResponse, ApiError> {
    let workout_type = record.workout_type.parse::<WorkoutType>().map_err(|e| {
        ApiError::Internal(anyhow::anyhow!("Corrupt workout {}: {}", record.id, e))
    })?;

    Ok(WorkoutResponse {
        id: record.id.to_string(),
        workout_type,
        duration_minutes: record.duration_minutes,
        intensity: record.intensity,
        notes: record.notes,
        goal_achieved: record.goal_achieved,
        calories_burned: calories_burned(workout_type, record.duration_minutes, record.intensity),
        user_id: record.user_id.to_string(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
