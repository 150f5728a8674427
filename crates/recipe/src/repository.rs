use sqlx::SqlitePool;

use crate::error::RecipeResult;
use crate::{NewRecipe, Recipe, RecipeWithOwner};

/// Insert a validated recipe, returning the stored row. Single statement;
/// nothing is persisted when the insert fails.
pub async fn insert(pool: &SqlitePool, new_recipe: &NewRecipe) -> RecipeResult<Recipe> {
    let recipe = sqlx::query_as::<_, Recipe>(
        "INSERT INTO recipes (title, instructions, minutes_to_complete, user_id)
         VALUES (?, ?, ?, ?)
         RETURNING id, title, instructions, minutes_to_complete, user_id",
    )
    .bind(&new_recipe.title)
    .bind(&new_recipe.instructions)
    .bind(new_recipe.minutes_to_complete)
    .bind(new_recipe.user_id)
    .fetch_one(pool)
    .await?;

    Ok(recipe)
}

/// All recipes system-wide with their owners' public columns joined in.
/// Visibility is not scoped per owner; any authenticated caller sees all.
pub async fn list_all(pool: &SqlitePool) -> RecipeResult<Vec<RecipeWithOwner>> {
    let recipes = sqlx::query_as::<_, RecipeWithOwner>(
        "SELECT r.id, r.title, r.instructions, r.minutes_to_complete, r.user_id,
                u.username AS owner_username,
                u.image_url AS owner_image_url,
                u.bio AS owner_bio
         FROM recipes r
         JOIN users u ON u.id = r.user_id
         ORDER BY r.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}

/// One user's recipes, for embedding into their user document.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> RecipeResult<Vec<Recipe>> {
    let recipes = sqlx::query_as::<_, Recipe>(
        "SELECT id, title, instructions, minutes_to_complete, user_id
         FROM recipes
         WHERE user_id = ?
         ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}
