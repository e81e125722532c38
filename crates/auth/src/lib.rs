//! `faregate-auth` — pure role-based access-control boundary.
//!
//! This crate is intentionally decoupled from HTTP, storage, and the identity
//! provider: sessions and tokens are issued elsewhere, and what arrives here
//! is only the (already decoded) user record or an abstract claim source.
//! Every classification function is total — undecidable input always resolves
//! to the least-privileged role, never to an error and never to a privilege.

pub mod claims;
pub mod descriptor;
pub mod guard;
pub mod manage;
pub mod policy;
pub mod roles;

pub use claims::{ClaimSource, UserMetadata, UserRecord};
pub use descriptor::{RoleDescriptor, color_for_claim, label_for_claim};
pub use guard::{AccessError, require_admin, require_staff};
pub use manage::{authorize_deletion, authorize_role_change};
pub use policy::{classify, has_staff_role, is_admin, is_conductor, is_passenger};
pub use roles::Role;
