use thiserror::Error;

/// Domain-specific errors for recipe operations
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for RecipeError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid"),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        RecipeError::ValidationError(messages.join(" "))
    }
}

/// Result type for recipe operations that may fail with RecipeError
pub type RecipeResult<T> = Result<T, RecipeError>;
