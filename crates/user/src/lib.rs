mod error;
mod input;
mod password;
mod repository;

pub use error::{UserError, UserResult};
pub use input::SignupInput;
pub use repository::{find_by_id, find_by_username, insert};

use sqlx::FromRow;
use validator::Validate;

/// A persisted user account.
///
/// The credential is write-only: it enters through [`NewUser::from_input`]
/// and is read back only by [`verify_password`](User::verify_password).
/// There is no getter, and no response document ever carries the hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    password_hash: String,
}

impl User {
    /// Check a candidate password against the stored Argon2 hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors only when the stored hash
    /// itself cannot be parsed.
    pub fn verify_password(&self, candidate: &str) -> UserResult<bool> {
        password::verify_password(candidate, &self.password_hash)
    }
}

/// A validated account that has not been persisted yet.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    password_hash: String,
}

impl NewUser {
    /// Validate signup input and hash the password.
    ///
    /// Validation runs before anything touches the database; the plaintext
    /// is dropped here and only the hash is carried forward.
    pub fn from_input(input: SignupInput) -> UserResult<Self> {
        input.validate().map_err(UserError::from)?;

        let password_hash = password::hash_password(&input.password)?;

        Ok(Self {
            username: input.username,
            image_url: input.image_url,
            bio: input.bio,
            password_hash,
        })
    }
}
