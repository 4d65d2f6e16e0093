use crate::types::DbId;

/// Domain error taxonomy.
///
/// The only domain-level failure in this system is a lookup miss: every
/// other failure (malformed body, storage outage) propagates from the web
/// or storage layer untouched.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with the given id exists in the entity's table.
    ///
    /// `entity` is the human-readable name used in the HTTP message
    /// ("Project", "Blog Post", "Contact"); `id` is kept for logging.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}
