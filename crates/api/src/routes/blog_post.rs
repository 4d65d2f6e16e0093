//! Route definitions for the `/blogposts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog_post;
use crate::state::AppState;

/// Routes for the blog post resource.
///
/// ```text
/// GET    /blogposts/       -> list
/// POST   /blogposts/       -> create
/// GET    /blogposts/{id}   -> get_by_id
/// PUT    /blogposts/{id}   -> update
/// DELETE /blogposts/{id}   -> delete
/// ```
///
/// Collection routes are registered with and without the trailing slash;
/// clients use both spellings.
pub fn router() -> Router<AppState> {
    let collection = get(blog_post::list).post(blog_post::create);

    Router::new()
        .route("/blogposts", collection.clone())
        .route("/blogposts/", collection)
        .route(
            "/blogposts/{id}",
            get(blog_post::get_by_id)
                .put(blog_post::update)
                .delete(blog_post::delete),
        )
}
