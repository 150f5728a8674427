use validator::Validate;

/// Recipe creation input. The length floor on `instructions` is the one
/// substantive content rule the system enforces.
#[derive(Debug, Validate)]
pub struct RecipeInput {
    #[validate(length(min = 1, message = "Title must be present."))]
    pub title: String,
    #[validate(length(
        min = 50,
        message = "Instructions must be at least 50 characters long."
    ))]
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
}
