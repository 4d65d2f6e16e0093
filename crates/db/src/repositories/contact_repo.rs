//! Repository for the `contacts` table.
//!
//! Contacts expose a reduced surface: create, update, and delete only.
//! The public contract never reads contact messages back out, so there is
//! no list or find-by-id.

use portfolio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

const COLUMNS: &str = "id, name, email, message";

/// Provides create/update/delete operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact message, returning the created row with its
    /// assigned id.
    pub async fn create(pool: &SqlitePool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every non-id field of a contact message.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET name = ?2, email = ?3, message = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact message by id, returning the row's prior state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("DELETE FROM contacts WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
