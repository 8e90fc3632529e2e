//! Recipe repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_name: String,
    pub cuisine_type: String,
    pub is_vegetarian: bool,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub ingredients: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a recipe
#[derive(Debug, Clone)]
pub struct CreateRecipe {
    pub user_id: Uuid,
    pub recipe_name: String,
    pub cuisine_type: String,
    pub is_vegetarian: bool,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub ingredients: String,
}

/// Input for a partial update
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipe {
    pub recipe_name: Option<String>,
    pub cuisine_type: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub ingredients: Option<String>,
}

/// List filters; `None` means "don't filter"
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Canonical cuisine name, e.g. `"Italian"`
    pub cuisine_type: Option<String>,
    pub is_vegetarian: Option<bool>,
}

const COLUMNS: &str = "id, user_id, recipe_name, cuisine_type, is_vegetarian, \
    prep_time_minutes, cook_time_minutes, ingredients, created_at, updated_at";

/// Recipe repository for database operations
pub struct RecipeRepository;

impl RecipeRepository {
    /// Create a new recipe
    pub async fn create(pool: &PgPool, input: CreateRecipe) -> Result<RecipeRecord> {
        let record = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            INSERT INTO recipes (user_id, recipe_name, cuisine_type, is_vegetarian,
                                 prep_time_minutes, cook_time_minutes, ingredients)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(input.user_id)
        .bind(&input.recipe_name)
        .bind(&input.cuisine_type)
        .bind(input.is_vegetarian)
        .bind(input.prep_time_minutes)
        .bind(input.cook_time_minutes)
        .bind(&input.ingredients)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a recipe by ID for its owner
    pub async fn get_by_id(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM recipes
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Fetch several of a user's recipes at once; foreign or unknown ids
    /// are simply absent from the result
    pub async fn get_many_by_ids(
        pool: &PgPool,
        user_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<RecipeRecord>> {
        let records = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM recipes
            WHERE user_id = $1 AND id = ANY($2)
            ORDER BY created_at DESC, id
            "#
        ))
        .bind(user_id)
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// One page of a user's recipes, newest first, plus the filtered total
    pub async fn list_paginated(
        pool: &PgPool,
        user_id: Uuid,
        filter: &RecipeFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<RecipeRecord>, i64)> {
        let records = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM recipes
            WHERE user_id = $1
              AND ($2::text IS NULL OR cuisine_type = $2)
              AND ($3::boolean IS NULL OR is_vegetarian = $3)
            ORDER BY created_at DESC, id
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(user_id)
        .bind(&filter.cuisine_type)
        .bind(filter.is_vegetarian)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM recipes
            WHERE user_id = $1
              AND ($2::text IS NULL OR cuisine_type = $2)
              AND ($3::boolean IS NULL OR is_vegetarian = $3)
            "#,
        )
        .bind(user_id)
        .bind(&filter.cuisine_type)
        .bind(filter.is_vegetarian)
        .fetch_one(pool)
        .await?;

        Ok((records, total))
    }

    /// Apply a partial update; `None` if the recipe isn't the user's
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        updates: UpdateRecipe,
    ) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(&format!(
            r#"
            UPDATE recipes SET
                recipe_name = COALESCE($3, recipe_name),
                cuisine_type = COALESCE($4, cuisine_type),
                is_vegetarian = COALESCE($5, is_vegetarian),
                prep_time_minutes = COALESCE($6, prep_time_minutes),
                cook_time_minutes = COALESCE($7, cook_time_minutes),
                ingredients = COALESCE($8, ingredients),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(updates.recipe_name)
        .bind(updates.cuisine_type)
        .bind(updates.is_vegetarian)
        .bind(updates.prep_time_minutes)
        .bind(updates.cook_time_minutes)
        .bind(updates.ingredients)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a recipe; false if it isn't the user's
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
