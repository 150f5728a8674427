use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::auth::{SessionStore, require_session};
use crate::config::Config;

mod auth;
mod docs;
mod health;
mod recipes;

pub use docs::{RecipeDoc, RecipeSummary, UserDoc, UserSummary};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionStore,
    pub config: Config,
}

/// Build the application router.
///
/// Everything behind the session guard lives in its own sub-router so a
/// missing or stale token is rejected before any handler runs.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/check_session", get(auth::check_session))
        .route("/logout", delete(auth::logout))
        .route("/recipes", get(recipes::index).post(recipes::create))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/signup", post(auth::signup))
                .route("/login", post(auth::login))
                .merge(protected)
                .with_state(state),
        )
        .layer(TraceLayer::new_for_http())
}
