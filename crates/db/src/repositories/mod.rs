//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod blog_post_repo;
pub mod contact_repo;
pub mod project_repo;

pub use blog_post_repo::BlogPostRepo;
pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
