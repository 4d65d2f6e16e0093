//! Repository for the `blogposts` table.

use portfolio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

const COLUMNS: &str = "id, title, content";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new blog post, returning the created row with its assigned id.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogposts (title, content)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a blog post by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogposts WHERE id = ?1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all blog posts in storage-default order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogposts");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Overwrite every non-id field of a blog post.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blogposts SET title = ?2, content = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a blog post by id, returning the row's prior state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("DELETE FROM blogposts WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
