//! HTTP-level integration tests for signup and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/signup",
        serde_json::json!({"username": "alice", "password": "hunter2hunter2"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Account created successfully");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/signup",
        serde_json::json!({"username": "alice", "password": "hunter2hunter2"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/signup",
        serde_json::json!({"username": "alice", "password": "different-pass"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_short_password_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/signup",
        serde_json::json!({"username": "bob", "password": "short"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_after_signup_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/signup",
        serde_json::json!({"username": "carol", "password": "p4ssw0rd-long"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "carol", "password": "p4ssw0rd-long"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/signup",
        serde_json::json!({"username": "dave", "password": "p4ssw0rd-long"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "dave", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "nobody", "password": "whatever-pass"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
