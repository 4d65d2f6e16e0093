//! HTTP-level integration tests for the `/blogposts` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create / list / get
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_blog_post_returns_object_with_id(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/blogposts/",
        serde_json::json!({"title": "First post", "content": "Hello, world"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "First post");
    assert_eq!(json["content"], "Hello, world");
    assert!(json["id"].is_number());
}

#[sqlx::test]
async fn list_blog_posts_returns_all_created(pool: SqlitePool) {
    for title in ["One", "Two"] {
        let app = common::build_test_app(pool.clone()).await;
        post_json(
            app,
            "/blogposts/",
            serde_json::json!({"title": title, "content": ""}),
        )
        .await;
    }

    let app = common::build_test_app(pool).await;
    let response = get(app, "/blogposts/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn get_blog_post_by_id_returns_same_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(
            app,
            "/blogposts/",
            serde_json::json!({"title": "Read back", "content": "body text"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = get(app, &format!("/blogposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test]
async fn get_nonexistent_blog_post_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/blogposts/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Blog Post not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_blog_post_overwrites_all_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(
            app,
            "/blogposts/",
            serde_json::json!({"title": "Draft", "content": "wip"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        &format!("/blogposts/{id}"),
        serde_json::json!({"title": "Published", "content": "final"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Published");
    assert_eq!(json["content"], "final");
    assert_eq!(json["id"], id);
}

#[sqlx::test]
async fn update_nonexistent_blog_post_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        "/blogposts/999999",
        serde_json::json!({"title": "t", "content": "c"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Blog Post not found");
}

#[sqlx::test]
async fn delete_blog_post_returns_prior_state_then_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(
            app,
            "/blogposts/",
            serde_json::json!({"title": "Doomed", "content": "bye"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = delete(app, &format!("/blogposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = common::build_test_app(pool).await;
    let response = get(app, &format!("/blogposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
