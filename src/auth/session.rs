use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sqlx::SqlitePool;
use time::OffsetDateTime;

/// Server-side session store backed by the `sessions` table.
///
/// Tokens are opaque to clients: 32 random bytes, URL-safe base64. Expiry
/// is enforced on lookup and stale rows are swept lazily, so no background
/// task is needed.
#[derive(Clone)]
pub struct SessionStore {
    pool: SqlitePool,
    ttl_seconds: i64,
}

impl SessionStore {
    pub fn new(pool: SqlitePool, ttl_seconds: i64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Issue a fresh token bound to a user id.
    pub async fn create(&self, user_id: i64) -> Result<String, sqlx::Error> {
        let token = generate_token();
        let expires_at = OffsetDateTime::now_utc().unix_timestamp() + self.ttl_seconds;

        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user_id)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(token)
    }

    /// Resolve a token to its user id. Expired sessions resolve to `None`
    /// and are deleted along the way.
    pub async fn lookup(&self, token: &str) -> Result<Option<i64>, sqlx::Error> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await?;

        let row: Option<(i64,)> =
            sqlx::query_as("SELECT user_id FROM sessions WHERE token = ? AND expires_at > ?")
                .bind(token)
                .bind(now)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(user_id,)| user_id))
    }

    /// Drop a session. Unknown tokens are a no-op.
    pub async fn invalidate(&self, token: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
