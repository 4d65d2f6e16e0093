//! Route definitions for the `/contacts` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes for the contact resource.
///
/// ```text
/// POST   /contacts/       -> create
/// PUT    /contacts/{id}   -> update
/// DELETE /contacts/{id}   -> delete
/// ```
///
/// There is no list or get-by-id route; the contract never reads contact
/// messages back out. Collection routes are registered with and without
/// the trailing slash; clients use both spellings.
pub fn router() -> Router<AppState> {
    let collection = post(contact::create);

    Router::new()
        .route("/contacts", collection.clone())
        .route("/contacts/", collection)
        .route(
            "/contacts/{id}",
            put(contact::update).delete(contact::delete),
        )
}
