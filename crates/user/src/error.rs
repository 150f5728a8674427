use thiserror::Error;

/// Domain-specific errors for account operations
///
/// These errors represent business logic failures that the application
/// layer maps onto HTTP status codes and error documents.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username already exists.")]
    UsernameTaken,

    #[error("{0}")]
    ValidationError(String),

    #[error("Password hashing failed")]
    HashingError(String),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for UserError {
    fn from(errors: validator::ValidationErrors) -> Self {
        UserError::ValidationError(flatten_messages(errors))
    }
}

// Validator reports per-field maps; the API contract wants one string.
// Sorted so the message is stable regardless of hash-map iteration order.
fn flatten_messages(errors: validator::ValidationErrors) -> String {
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
    messages.join(" ")
}

/// Result type for account operations that may fail with UserError
pub type UserResult<T> = Result<T, UserError>;
