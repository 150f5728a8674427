//! Recipe handlers: system-wide listing and creation

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tastebook_recipe::{NewRecipe, RecipeInput};

use super::{AppState, RecipeDoc};
use crate::auth::CurrentUser;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct CreateRecipePayload {
    pub title: String,
    pub instructions: String,
    #[serde(default)]
    pub minutes_to_complete: Option<i64>,
}

/// GET /recipes
///
/// All recipes, not just the caller's. Each document embeds the owner's
/// public fields.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<RecipeDoc>>, AppError> {
    let recipes = tastebook_recipe::list_all(&state.pool).await?;

    Ok(Json(recipes.into_iter().map(RecipeDoc::from).collect()))
}

/// POST /recipes
///
/// The owner is the session user; any owner field in the payload is
/// ignored.
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    payload: Result<Json<CreateRecipePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let new_recipe = NewRecipe::from_input(
        RecipeInput {
            title: payload.title,
            instructions: payload.instructions,
            minutes_to_complete: payload.minutes_to_complete,
        },
        current.user_id,
    )?;

    let recipe = tastebook_recipe::insert(&state.pool, &new_recipe).await?;
    tracing::info!(recipe_id = recipe.id, user_id = current.user_id, "recipe created");

    let Some(owner) = tastebook_user::find_by_id(&state.pool, current.user_id).await? else {
        return Err(AppError::Unauthorized);
    };

    Ok((StatusCode::CREATED, Json(RecipeDoc::new(recipe, owner))))
}
