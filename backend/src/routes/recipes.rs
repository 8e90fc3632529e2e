//! Recipe API routes

use super::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::{AssistantService, RecipeService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lifestyle_hub_shared::types::{
    CreateRecipeRequest, MessageResponse, RecipeListQuery, RecipePage, RecipeResponse,
    ShoppingList, ShoppingListRequest, UpdateRecipeRequest,
};

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_recipe).get(list_recipes))
        .route("/shopping-list", post(shopping_list))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

/// POST /recipes
async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateRecipeRequest>,
) -> ApiResult<(StatusCode, Json<RecipeResponse>)> {
    let recipe = RecipeService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes?cuisine_type=&is_vegetarian=&page=&per_page=
async fn list_recipes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RecipeListQuery>,
) -> ApiResult<Json<RecipePage>> {
    let page = RecipeService::list(state.db(), auth.user_id, &query).await?;
    Ok(Json(page))
}

/// GET /recipes/:id
async fn get_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = RecipeService::get(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(Json(recipe))
}

/// PUT /recipes/:id
async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateRecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = RecipeService::update(state.db(), auth.user_id, parse_id(&id)?, req).await?;
    Ok(Json(recipe))
}

/// DELETE /recipes/:id
async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    RecipeService::delete(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}

/// POST /recipes/shopping-list
async fn shopping_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<ShoppingListRequest>,
) -> ApiResult<Json<ShoppingList>> {
    let list = AssistantService::shopping_list(state.db(), state.ai(), auth.user_id, req).await?;
    Ok(Json(list))
}
