use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;

use tastebook::auth::SessionStore;
use tastebook::config::{
    Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SessionConfig,
};
use tastebook::routes::{AppState, router};

pub async fn setup_test_db() -> SqlitePool {
    // A single connection keeps every request on the same :memory: database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            max_connections: 1,
        },
        session: SessionConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let sessions = SessionStore::new(pool.clone(), config.session.ttl_seconds);

    router(AppState {
        pool,
        sessions,
        config,
    })
}

/// Fire one JSON request at the router, optionally echoing a session cookie.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Extract the session cookie pair from a Set-Cookie header.
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign up a user and hand back the session cookie plus the user document.
pub async fn signup(app: &Router, username: &str, password: &str) -> (String, Value) {
    let response = send_json(
        app,
        "POST",
        "/signup",
        Some(json!({ "username": username, "password": password })),
        None,
    )
    .await;

    assert_eq!(response.status(), 201, "signup should succeed");
    let cookie = session_cookie(&response);
    let doc = body_json(response).await;

    (cookie, doc)
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

pub async fn count_recipes(pool: &SqlitePool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
