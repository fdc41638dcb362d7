//! Domain error taxonomy.
//!
//! The four error kinds the placement core surfaces to callers. The HTTP
//! layer maps these onto status codes; nothing here is retried and no
//! error is ever downgraded to a success.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
