//! End-to-end tests for signup, login, logout and session checks

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn signup_creates_user_and_establishes_a_session() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool.clone()).await;

    let (cookie, doc) = common::signup(&app, "alice", "secret123").await;

    assert_eq!(doc["username"], "alice");
    assert!(doc["id"].is_i64());
    assert_eq!(doc["recipes"], json!([]));

    // The credential must not appear under any name.
    assert!(doc.get("password").is_none());
    assert!(doc.get("password_hash").is_none());

    // The signup response already authenticates the caller.
    let response = common::send_json(&app, "GET", "/check_session", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["id"], doc["id"]);
}

#[tokio::test]
async fn signup_with_duplicate_username_returns_422_and_no_row() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool.clone()).await;

    common::signup(&app, "alice", "secret123").await;

    let response = common::send_json(
        &app,
        "POST",
        "/signup",
        Some(json!({ "username": "alice", "password": "different456" })),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        common::body_json(response).await["errors"],
        "Username already exists."
    );
    assert_eq!(common::count_users(&pool).await, 1);
}

#[tokio::test]
async fn signup_with_empty_username_returns_422_and_no_row() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool.clone()).await;

    let response = common::send_json(
        &app,
        "POST",
        "/signup",
        Some(json!({ "username": "", "password": "secret123" })),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        common::body_json(response).await["errors"],
        "Username must be present."
    );
    assert_eq!(common::count_users(&pool).await, 0);
}

#[tokio::test]
async fn signup_with_malformed_body_returns_422() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    // Missing the password field entirely.
    let response = common::send_json(
        &app,
        "POST",
        "/signup",
        Some(json!({ "username": "alice" })),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn login_round_trip_preserves_the_user_id() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let (_, signup_doc) = common::signup(&app, "alice", "secret123").await;

    let response = common::send_json(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "alice", "password": "secret123" })),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = common::session_cookie(&response);
    let login_doc = common::body_json(response).await;
    assert_eq!(login_doc["id"], signup_doc["id"]);

    let response = common::send_json(&app, "GET", "/check_session", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn failed_logins_are_indistinguishable() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    common::signup(&app, "alice", "secret123").await;

    let wrong_password = common::send_json(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "alice", "password": "wrong" })),
        None,
    )
    .await;
    let unknown_user = common::send_json(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "nobody", "password": "secret123" })),
        None,
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(wrong_password).await,
        common::body_json(unknown_user).await
    );
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let (cookie, _) = common::signup(&app, "alice", "secret123").await;

    let response = common::send_json(&app, "DELETE", "/logout", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The old token no longer resolves.
    let response = common::send_json(&app, "GET", "/check_session", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A fresh login works again.
    let response = common::send_json(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "alice", "password": "secret123" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_without_a_session_returns_401() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let response = common::send_json(&app, "DELETE", "/logout", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn check_session_without_a_cookie_returns_401() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let response = common::send_json(&app, "GET", "/check_session", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::body_json(response).await["errors"], "Unauthorized");
}

#[tokio::test]
async fn check_session_with_a_garbage_token_returns_401() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let response = common::send_json(
        &app,
        "GET",
        "/check_session",
        None,
        Some("tastebook_session=not-a-real-token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signup_accepts_optional_profile_fields() {
    let pool = common::setup_test_db().await;
    let app = common::create_test_app(pool).await;

    let response = common::send_json(
        &app,
        "POST",
        "/signup",
        Some(json!({
            "username": "bob",
            "password": "secret123",
            "image_url": "https://example.com/bob.png",
            "bio": "Home cook"
        })),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let doc = common::body_json(response).await;
    assert_eq!(doc["image_url"], "https://example.com/bob.png");
    assert_eq!(doc["bio"], "Home cook");
}
