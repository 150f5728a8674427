use validator::Validate;

/// Signup input, validated before the account is constructed.
///
/// The password has no length rule of its own; it is hashed whatever its
/// content and never persisted in the clear.
#[derive(Debug, Validate)]
pub struct SignupInput {
    #[validate(length(min = 1, message = "Username must be present."))]
    pub username: String,
    pub password: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}
