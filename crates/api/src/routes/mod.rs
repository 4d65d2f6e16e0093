//! Route definitions, one module per resource.

pub mod blog_post;
pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// ```text
/// /projects/    create, list
/// /projects/{id}    get, update, delete
///
/// /blogposts/   create, list
/// /blogposts/{id}   get, update, delete
///
/// /contacts/    create
/// /contacts/{id}    update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(blog_post::router())
        .merge(contact::router())
}
