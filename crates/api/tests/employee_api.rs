//! HTTP-level integration tests for the `/employees` resource.
//!
//! Create and rename use raw text bodies, matching the desktop client.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_text, put_text};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_employee_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_text(app, "/employees", "Alice").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_employee_empty_name_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_text(app, "/employees", "   ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_employee_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_text(app, "/employees", "Bob").await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Bob");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_employee_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/employees/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_employees(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_text(app, "/employees", "Alice").await;
    let app = common::build_test_app(pool.clone());
    post_text(app, "/employees", "Bob").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/employees").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rename_employee(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_text(app, "/employees", "Original").await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_text(app, &format!("/employees/{id}"), "Renamed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rename_nonexistent_employee_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_text(app, "/employees/999999", "Ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_employee_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_text(app, "/employees", "Delete Me").await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
