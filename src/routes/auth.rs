//! Identity and session handlers: signup, login, logout, check_session

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use sqlx::SqlitePool;
use tastebook_user::{NewUser, SignupInput, User};

use super::{AppState, UserDoc};
use crate::auth::{CurrentUser, SESSION_COOKIE};
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SignupPayload {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// POST /signup
///
/// Creates the account and logs the caller in as a side effect: the
/// response already carries the session cookie.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignupPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let new_user = NewUser::from_input(SignupInput {
        username: payload.username,
        password: payload.password,
        image_url: payload.image_url,
        bio: payload.bio,
    })?;

    let user = tastebook_user::insert(&state.pool, &new_user).await?;
    tracing::info!(user_id = user.id, "user registered");

    let token = state.sessions.create(user.id).await?;
    let jar = jar.add(session_cookie(token, state.config.session.cookie_secure));

    let doc = user_doc(&state.pool, user).await?;

    Ok((StatusCode::CREATED, jar, Json(doc)))
}

/// GET /check_session
///
/// The guard has already resolved the token; a session row whose user has
/// vanished still answers 401.
pub async fn check_session(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<UserDoc>, AppError> {
    let Some(user) = tastebook_user::find_by_id(&state.pool, current.user_id).await? else {
        return Err(AppError::Unauthorized);
    };

    Ok(Json(user_doc(&state.pool, user).await?))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    // Unknown username and wrong password answer identically.
    let Some(user) = tastebook_user::find_by_username(&state.pool, &payload.username).await? else {
        return Err(AppError::InvalidCredentials);
    };
    if !user.verify_password(&payload.password)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.create(user.id).await?;
    tracing::info!(user_id = user.id, "user logged in");
    let jar = jar.add(session_cookie(token, state.config.session.cookie_secure));

    let doc = user_doc(&state.pool, user).await?;

    Ok((jar, Json(doc)))
}

/// DELETE /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    state.sessions.invalidate(&current.token).await?;
    tracing::info!(user_id = current.user_id, "user logged out");

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    Ok((jar, StatusCode::NO_CONTENT))
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(super) async fn user_doc(pool: &SqlitePool, user: User) -> Result<UserDoc, AppError> {
    let recipes = tastebook_recipe::list_for_user(pool, user.id).await?;
    Ok(UserDoc::new(user, recipes))
}
