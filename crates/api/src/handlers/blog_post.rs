//! Handlers for the `/blogposts` resource.
//!
//! Mirrors the project resource over `{title, content}`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use portfolio_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /blogposts/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::create(&state.pool, &input).await?;

    tracing::info!(blog_post_id = post.id, "Blog post created");

    Ok(Json(post))
}

/// GET /blogposts/
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list(&state.pool).await?;

    Ok(Json(posts))
}

/// GET /blogposts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog Post",
            id,
        }))?;

    Ok(Json(post))
}

/// PUT /blogposts/{id}
///
/// Overwrite all fields of an existing blog post.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog Post",
            id,
        }))?;

    tracing::info!(blog_post_id = id, "Blog post updated");

    Ok(Json(post))
}

/// DELETE /blogposts/{id}
///
/// Remove a blog post and return its prior state.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog Post",
            id,
        }))?;

    tracing::info!(blog_post_id = id, "Blog post deleted");

    Ok(Json(post))
}
