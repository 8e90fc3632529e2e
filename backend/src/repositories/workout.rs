//! Workout repository for database operations
//!
//! Every query is scoped by `user_id`; a row owned by someone else behaves
//! exactly like a missing row.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: i32,
    pub notes: Option<String>,
    pub goal_achieved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: i32,
    pub notes: Option<String>,
    pub goal_achieved: bool,
}

/// Input for a partial update. `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkout {
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub intensity: Option<i32>,
    pub notes: Option<Option<String>>,
    pub goal_achieved: Option<bool>,
}

/// List filters; `None` means "don't filter"
#[derive(Debug, Clone, Default)]
pub struct WorkoutFilter {
    /// Canonical type name, e.g. `"Cardio"`
    pub workout_type: Option<String>,
    /// Substring matched case-insensitively against notes
    pub notes_query: Option<String>,
}

const COLUMNS: &str =
    "id, user_id, workout_type, duration_minutes, intensity, notes, goal_achieved, created_at, updated_at";

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workouts (user_id, workout_type, duration_minutes, intensity, notes, goal_achieved)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(input.user_id)
        .bind(&input.workout_type)
        .bind(input.duration_minutes)
        .bind(input.intensity)
        .bind(&input.notes)
        .bind(input.goal_achieved)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a workout by ID for its owner
    pub async fn get_by_id(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<WorkoutRecord>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// One page of a user's workouts, newest first, plus the filtered total
    pub async fn list_paginated(
        pool: &PgPool,
        user_id: Uuid,
        filter: &WorkoutFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<WorkoutRecord>, i64)> {
        let records = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM workouts
            WHERE user_id = $1
              AND ($2::text IS NULL OR workout_type = $2)
              AND ($3::text IS NULL OR notes ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC, id
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(user_id)
        .bind(&filter.workout_type)
        .bind(&filter.notes_query)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM workouts
            WHERE user_id = $1
              AND ($2::text IS NULL OR workout_type = $2)
              AND ($3::text IS NULL OR notes ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(user_id)
        .bind(&filter.workout_type)
        .bind(&filter.notes_query)
        .fetch_one(pool)
        .await?;

        Ok((records, total))
    }

    /// Get the N most recent workouts for a user
    pub async fn get_recent(pool: &PgPool, user_id: Uuid, limit: i64) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Apply a partial update; `None` if the workout isn't the user's
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        updates: UpdateWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let (notes_set, notes) = match updates.notes {
            Some(value) => (true, value),
            None => (false, None),
        };

        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            UPDATE workouts SET
                workout_type = COALESCE($3, workout_type),
                duration_minutes = COALESCE($4, duration_minutes),
                intensity = COALESCE($5, intensity),
                notes = CASE WHEN $6::boolean THEN $7::text ELSE notes END,
                goal_achieved = COALESCE($8, goal_achieved),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(updates.workout_type)
        .bind(updates.duration_minutes)
        .bind(updates.intensity)
        .bind(notes_set)
        .bind(notes)
        .bind(updates.goal_achieved)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a workout; false if it isn't the user's
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
