//! Recipe service: validation, ownership and derived fields

use crate::error::ApiError;
use crate::services::owned_insert_error;
use crate::repositories::{CreateRecipe, RecipeFilter, RecipeRecord, RecipeRepository, UpdateRecipe};
use lifestyle_hub_shared::types::{
    CreateRecipeRequest, RecipeListQuery, RecipePage, RecipeResponse, UpdateRecipeRequest,
};
use lifestyle_hub_shared::validation::{parse_bool_flag, validate_not_blank};
use lifestyle_hub_shared::{total_cooking_time, CuisineType, Pagination};
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Default page size for recipe listings
pub const RECIPES_PER_PAGE: u32 = 5;

/// Recipe service for business logic
pub struct RecipeService;

impl RecipeService {
    /// Create a recipe for the user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateRecipeRequest,
    ) -> Result<RecipeResponse, ApiError> {
        req.validate()?;
        validate_not_blank("recipe_name", &req.recipe_name).map_err(ApiError::Validation)?;
        validate_not_blank("ingredients", &req.ingredients).map_err(ApiError::Validation)?;
        let cuisine_type = parse_cuisine_type(&req.cuisine_type)?;

        let record = RecipeRepository::create(
            pool,
            CreateRecipe {
                user_id,
                recipe_name: req.recipe_name.trim().to_string(),
                cuisine_type: cuisine_type.as_str().to_string(),
                is_vegetarian: req.is_vegetarian,
                prep_time_minutes: req.prep_time_minutes,
                cook_time_minutes: req.cook_time_minutes,
                ingredients: req.ingredients,
            },
        )
        .await
        .map_err(owned_insert_error)?;

        info!(user_id = %user_id, recipe_id = %record.id, "Recipe created");
        to_response(record)
    }

    /// List the user's recipes with filters and pagination
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        query: &RecipeListQuery,
    ) -> Result<RecipePage, ApiError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.per_page.as_deref(),
            RECIPES_PER_PAGE,
        );
        let filter = filter_from_query(query);

        let (records, total) = RecipeRepository::list_paginated(
            pool,
            user_id,
            &filter,
            pagination.limit(),
            pagination.offset(),
        )
        .await
        .map_err(ApiError::Internal)?;

        debug!(user_id = %user_id, total, page = pagination.page, "Listed recipes");

        Ok(RecipePage {
            recipes: records
                .into_iter()
                .map(to_response)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            pages: pagination.total_pages(total),
            current_page: pagination.page,
            per_page: pagination.per_page,
        })
    }

    /// Get one of the user's recipes
    pub async fn get(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<RecipeResponse, ApiError> {
        let record = RecipeRepository::get_by_id(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(not_found)?;

        to_response(record)
    }

    /// Fetch several of the user's recipes; any id that isn't theirs is a 404
    pub async fn get_many(
        pool: &PgPool,
        user_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<RecipeRecord>, ApiError> {
        let unique: Vec<Uuid> = {
            let mut seen = HashSet::new();
            ids.iter().copied().filter(|id| seen.insert(*id)).collect()
        };

        let records = RecipeRepository::get_many_by_ids(pool, user_id, &unique)
            .await
            .map_err(ApiError::Internal)?;

        if records.len() != unique.len() {
            return Err(not_found());
        }

        Ok(records)
    }

    /// Partially update one of the user's recipes
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: UpdateRecipeRequest,
    ) -> Result<RecipeResponse, ApiError> {
        req.validate()?;
        if let Some(name) = &req.recipe_name {
            validate_not_blank("recipe_name", name).map_err(ApiError::Validation)?;
        }
        if let Some(ingredients) = &req.ingredients {
            validate_not_blank("ingredients", ingredients).map_err(ApiError::Validation)?;
        }
        let cuisine_type = req
            .cuisine_type
            .as_deref()
            .map(parse_cuisine_type)
            .transpose()?;

        let updates = UpdateRecipe {
            recipe_name: req.recipe_name.map(|n| n.trim().to_string()),
            cuisine_type: cuisine_type.map(|c| c.as_str().to_string()),
            is_vegetarian: req.is_vegetarian,
            prep_time_minutes: req.prep_time_minutes,
            cook_time_minutes: req.cook_time_minutes,
            ingredients: req.ingredients,
        };

        let record = RecipeRepository::update(pool, user_id, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(not_found)?;

        info!(user_id = %user_id, recipe_id = %id, "Recipe updated");
        to_response(record)
    }

    /// Delete one of the user's recipes
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = RecipeRepository::delete(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(not_found());
        }

        info!(user_id = %user_id, recipe_id = %id, "Recipe deleted");
        Ok(())
    }
}

/// Parse a client-supplied cuisine name, rejecting unknown values
pub fn parse_cuisine_type(value: &str) -> Result<CuisineType, ApiError> {
    value.parse::<CuisineType>().map_err(ApiError::Validation)
}

fn not_found() -> ApiError {
    ApiError::NotFound("Recipe not found".to_string())
}

fn filter_from_query(query: &RecipeListQuery) -> RecipeFilter {
    RecipeFilter {
        cuisine_type: query
            .cuisine_type
            .as_deref()
            .and_then(|c| c.parse::<CuisineType>().ok())
            .map(|c| c.as_str().to_string()),
        is_vegetarian: query.is_vegetarian.as_deref().and_then(parse_bool_flag),
    }
}

fn to_response(record: RecipeRecord) -> Result<RecipeResponse, ApiError> {
    let cuisine_type = record.cuisine_type.parse::<CuisineType>().map_err(|e| {
        ApiError::Internal(anyhow::anyhow!("Corrupt recipe {}: {}", record.id, e))
    })?;

    Ok(RecipeResponse {
        id: record.id.to_string(),
        recipe_name: record.recipe_name,
        cuisine_type,
        is_vegetarian: record.is_vegetarian,
        prep_time_minutes: record.prep_time_minutes,
        cook_time_minutes: record.cook_time_minutes,
        ingredients: record.ingredients,
        total_cooking_time: total_cooking_time(record.prep_time_minutes, record.cook_time_minutes),
        user_id: record.user_id.to_string(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
