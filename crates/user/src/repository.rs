use sqlx::SqlitePool;

use crate::error::{UserError, UserResult};
use crate::{NewUser, User};

/// Insert a new account, returning the stored row.
///
/// The unique index on `username` is what serializes concurrent signups:
/// exactly one insert wins, the loser surfaces as [`UserError::UsernameTaken`].
/// A single statement, so a failed signup leaves nothing behind.
pub async fn insert(pool: &SqlitePool, new_user: &NewUser) -> UserResult<User> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, image_url, bio)
         VALUES (?, ?, ?, ?)
         RETURNING id, username, image_url, bio, password_hash",
    )
    .bind(&new_user.username)
    .bind(&new_user.password_hash)
    .bind(&new_user.image_url)
    .bind(&new_user.bio)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => UserError::UsernameTaken,
        _ => UserError::DatabaseError(e),
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> UserResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, image_url, bio, password_hash FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> UserResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, image_url, bio, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
