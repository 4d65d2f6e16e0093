//! Project entity model and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub link: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// DTO for updating an existing project.
///
/// Every field is required: an update overwrites the whole row. Unknown
/// fields in the request body are ignored by deserialization; missing
/// fields reject the request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
    pub link: String,
}
