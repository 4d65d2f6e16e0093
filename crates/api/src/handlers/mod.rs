//! HTTP request handlers, one module per resource.

pub mod blog_post;
pub mod contact;
pub mod project;
