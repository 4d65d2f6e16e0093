//! Contact message entity model and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact message row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// DTO for creating a new contact message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// DTO for updating an existing contact message. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
