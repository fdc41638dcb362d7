//! Placement policy.
//!
//! The only authorization in the system: a placed object carries an opaque
//! `owner` string supplied at creation, and deletion requires presenting
//! the exact same string. This is authorization by possession of a shared
//! secret string, not verified identity -- anyone who knows an owner string
//! can delete that owner's objects.

use crate::error::CoreError;

/// Validate the owner field of a new placement.
///
/// `owner` is required and must be non-empty; it is otherwise accepted
/// as-is (no format, length, or identity check).
pub fn validate_owner(owner: &str) -> Result<(), CoreError> {
    if owner.is_empty() {
        return Err(CoreError::Validation("owner must not be empty".into()));
    }
    Ok(())
}

/// Authorize a delete request against the stored owner.
///
/// Exact string equality, no case folding. A mismatch is `Forbidden` and
/// must leave storage untouched.
pub fn authorize_delete(stored_owner: &str, requesting_owner: &str) -> Result<(), CoreError> {
    if stored_owner != requesting_owner {
        return Err(CoreError::Forbidden("not the object owner".into()));
    }
    Ok(())
}
