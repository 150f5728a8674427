//! Route guard for session-authenticated endpoints

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use super::SESSION_COOKIE;
use crate::error::AppError;
use crate::routes::AppState;

/// Identity resolved from the session cookie, inserted into request
/// extensions for the handlers behind the guard.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    /// The token that authenticated this request; logout invalidates it.
    pub token: String,
}

/// Reject requests that do not carry a valid, unexpired session.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        debug!("no session cookie on request");
        return Err(AppError::Unauthorized);
    };

    let token = cookie.value().to_owned();

    let Some(user_id) = state.sessions.lookup(&token).await? else {
        debug!("session token unknown or expired");
        return Err(AppError::Unauthorized);
    };

    request.extensions_mut().insert(CurrentUser { user_id, token });

    Ok(next.run(request).await)
}
