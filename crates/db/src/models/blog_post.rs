//! Blog post entity model and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post row from the `blogposts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub content: String,
}

/// DTO for creating a new blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub content: String,
}

/// DTO for updating an existing blog post. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: String,
    pub content: String,
}
