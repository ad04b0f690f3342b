use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error raised when a caller acts on a resource they do not own.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("Not enough permissions")]
    NotOwner,
}

/// Single-owner access rule for mutating operations.
///
/// Applied after identity resolution succeeds, before any write to a
/// user-owned row. The rule is equality of principal and owner; there are
/// no roles or delegated grants.
///
/// # Arguments
/// * `actor` - The authenticated principal's user ID
/// * `owner` - The owner of the target resource
///
/// # Returns
/// Unit when the actor owns the resource
///
/// # Errors
/// * `NotOwner` - Actor is authenticated but does not own the resource
pub fn ensure_owner(actor: &UserId, owner: &UserId) -> Result<(), OwnershipError> {
    if actor == owner {
        Ok(())
    } else {
        Err(OwnershipError::NotOwner)
    }
}
