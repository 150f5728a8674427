mod error;
mod input;
mod repository;

pub use error::{RecipeError, RecipeResult};
pub use input::RecipeInput;
pub use repository::{insert, list_all, list_for_user};

use sqlx::FromRow;
use validator::Validate;

/// A persisted recipe. Rows are immutable once written: there is no
/// update or delete surface.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
}

/// A recipe row joined with its owner's public columns, for the
/// system-wide listing.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeWithOwner {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
    pub owner_username: String,
    pub owner_image_url: Option<String>,
    pub owner_bio: Option<String>,
}

/// A validated recipe that has not been persisted yet.
///
/// The owner id comes from the caller's session, never from client input.
#[derive(Debug)]
pub struct NewRecipe {
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
}

impl NewRecipe {
    /// Validate input and bind the owner. Rejects before anything is
    /// written, so a failed creation persists no partial state.
    pub fn from_input(input: RecipeInput, user_id: i64) -> RecipeResult<Self> {
        input.validate().map_err(RecipeError::from)?;

        Ok(Self {
            title: input.title,
            instructions: input.instructions,
            minutes_to_complete: input.minutes_to_complete,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, instructions: &str) -> RecipeInput {
        RecipeInput {
            title: title.to_string(),
            instructions: instructions.to_string(),
            minutes_to_complete: Some(30),
        }
    }

    #[test]
    fn from_input_binds_the_session_owner() {
        let new_recipe = NewRecipe::from_input(input("Stew", &"a".repeat(50)), 7).unwrap();
        assert_eq!(new_recipe.user_id, 7);
    }

    #[test]
    fn from_input_rejects_short_instructions() {
        let result = NewRecipe::from_input(input("Stew", &"a".repeat(49)), 7);
        assert!(matches!(result, Err(RecipeError::ValidationError(_))));
    }

    #[test]
    fn from_input_rejects_empty_title() {
        let result = NewRecipe::from_input(input("", &"a".repeat(50)), 7);
        assert!(matches!(result, Err(RecipeError::ValidationError(_))));
    }
}
