//! Authorization for user-management operations.
//!
//! Two rules, checked in order:
//!
//! 1. Only admins may manage users (strict raw-claim gate).
//! 2. Admin accounts are protected: their role cannot be changed and they
//!    cannot be deleted through user management, no matter who asks.
//!
//! These are pure policy checks; the actual mutation (and its persistence)
//! lives with the caller.

use crate::claims::ClaimSource;
use crate::guard::{AccessError, require_admin};
use crate::policy::is_admin;
use crate::roles::Role;

/// Authorize changing `target`'s role to `new_claim`.
///
/// Returns the normalized role the target should receive, so an alias claim
/// like `"student"` lands as [`Role::Passenger`] rather than being written
/// back raw.
pub fn authorize_role_change<A, T>(
    actor: &A,
    target: &T,
    new_claim: Option<&str>,
) -> Result<Role, AccessError>
where
    A: ClaimSource,
    T: ClaimSource,
{
    require_admin(actor)?;
    ensure_target_unprotected(target)?;
    Ok(Role::normalize(new_claim))
}

/// Authorize deleting `target`'s account.
pub fn authorize_deletion<A, T>(actor: &A, target: &T) -> Result<(), AccessError>
where
    A: ClaimSource,
    T: ClaimSource,
{
    require_admin(actor)?;
    ensure_target_unprotected(target)
}

fn ensure_target_unprotected<T: ClaimSource>(target: &T) -> Result<(), AccessError> {
    // Raw check, same strictness as the admin gate itself: only an exact
    // "admin" claim marks a protected account.
    if is_admin(target) {
        return Err(AccessError::ProtectedAccount);
    }
    Ok(())
}
