//! `Result`-shaped capability checks for route guards.
//!
//! Classification never fails; a guard denial is a policy outcome, not an
//! error condition. Translating [`AccessError`] into an HTTP status (or a
//! hidden UI affordance) is the caller's job.

use thiserror::Error;
use tracing::warn;

use crate::claims::ClaimSource;
use crate::policy::{classify, has_staff_role, is_admin};

/// Denial reasons surfaced by guards and user-management checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The caller lacks the required capability.
    #[error("forbidden: requires role '{required}'")]
    Forbidden { required: &'static str },

    /// The target of a user-management operation is an admin account, which
    /// cannot be modified or deleted through user management.
    #[error("admin accounts cannot be modified")]
    ProtectedAccount,
}

/// Admit only callers whose raw claim is exactly `"admin"`.
pub fn require_admin<S: ClaimSource>(source: &S) -> Result<(), AccessError> {
    if is_admin(source) {
        return Ok(());
    }
    warn!(role = %classify(source), required = "admin", "access_denied");
    Err(AccessError::Forbidden { required: "admin" })
}

/// Admit admins and conductors; reject everyone else.
pub fn require_staff<S: ClaimSource>(source: &S) -> Result<(), AccessError> {
    if has_staff_role(source) {
        return Ok(());
    }
    warn!(role = %classify(source), required = "staff", "access_denied");
    Err(AccessError::Forbidden { required: "staff" })
}
