//! Handlers for the `/contacts` resource.
//!
//! Contacts expose create, update, and delete only; the contract has no
//! list or get-by-id endpoint.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::contact::{CreateContact, UpdateContact};
use portfolio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /contacts/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(contact_id = contact.id, "Contact created");

    Ok(Json(contact))
}

/// PUT /contacts/{id}
///
/// Overwrite all fields of an existing contact message.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContact>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(contact_id = id, "Contact updated");

    Ok(Json(contact))
}

/// DELETE /contacts/{id}
///
/// Remove a contact message and return its prior state.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(contact_id = id, "Contact deleted");

    Ok(Json(contact))
}
