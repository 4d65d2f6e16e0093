//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes for the project resource.
///
/// ```text
/// GET    /projects/       -> list
/// POST   /projects/       -> create
/// GET    /projects/{id}   -> get_by_id
/// PUT    /projects/{id}   -> update
/// DELETE /projects/{id}   -> delete
/// ```
///
/// Collection routes are registered with and without the trailing slash;
/// clients use both spellings.
pub fn router() -> Router<AppState> {
    let collection = get(project::list).post(project::create);

    Router::new()
        .route("/projects", collection.clone())
        .route("/projects/", collection)
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
