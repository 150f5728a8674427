use argon2::{
    Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

// Argon2id with 64 MB memory, 3 iterations, 4 lanes.
fn hasher() -> UserResult<Argon2<'static>> {
    let params =
        Params::new(65536, 3, 4, None).map_err(|e| UserError::HashingError(e.to_string()))?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a plaintext password into a PHC string under a fresh random salt.
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::HashingError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a candidate password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash is an
/// error. The PHC string carries its own parameters, so verification
/// does not depend on the hashing configuration above.
pub fn verify_password(candidate: &str, stored: &str) -> UserResult<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| UserError::HashingError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}
