//! Response documents
//!
//! Hand-written per endpoint so the credential column can never leak and
//! the user<->recipe embedding stays one level deep: a user doc carries
//! recipes without their owner, a recipe doc carries its owner without
//! their recipes.

use serde::Serialize;
use tastebook_recipe::{Recipe, RecipeWithOwner};
use tastebook_user::User;

/// Public user fields, embedded in a recipe document.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image_url: user.image_url,
            bio: user.bio,
        }
    }
}

/// A recipe without its owner, embedded in a user document.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user_id: recipe.user_id,
        }
    }
}

/// User document returned by signup, login and check_session.
#[derive(Debug, Serialize)]
pub struct UserDoc {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub recipes: Vec<RecipeSummary>,
}

impl UserDoc {
    pub fn new(user: User, recipes: Vec<Recipe>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image_url: user.image_url,
            bio: user.bio,
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }
    }
}

/// Recipe document with its owner embedded.
#[derive(Debug, Serialize)]
pub struct RecipeDoc {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
    pub user: UserSummary,
}

impl RecipeDoc {
    pub fn new(recipe: Recipe, owner: User) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user_id: recipe.user_id,
            user: UserSummary::from(owner),
        }
    }
}

impl From<RecipeWithOwner> for RecipeDoc {
    fn from(row: RecipeWithOwner) -> Self {
        Self {
            id: row.id,
            title: row.title,
            instructions: row.instructions,
            minutes_to_complete: row.minutes_to_complete,
            user_id: row.user_id,
            user: UserSummary {
                id: row.user_id,
                username: row.owner_username,
                image_url: row.owner_image_url,
                bio: row.owner_bio,
            },
        }
    }
}
