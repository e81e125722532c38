use serde::{Deserialize, Serialize};

/// Raw claim literal for passengers.
pub const CLAIM_PASSENGER: &str = "passenger";
/// Raw claim literal for administrators.
pub const CLAIM_ADMIN: &str = "admin";
/// Raw claim literal for conductors.
pub const CLAIM_CONDUCTOR: &str = "conductor";
/// Legacy claim still present on older accounts; normalizes to passenger.
pub const CLAIM_STUDENT: &str = "student";

/// Canonical role set the system reasons about.
///
/// The enum is closed on purpose: an unmapped role cannot exist at compile
/// time, and every raw claim — recognized or not — collapses onto exactly one
/// variant via [`Role::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular rider; the least-privileged role and the fallback for any
    /// absent or unrecognized claim.
    #[default]
    Passenger,
    /// Back-office administrator.
    Admin,
    /// On-board ticket inspector.
    Conductor,
}

impl Role {
    /// Map a raw role claim onto the canonical role set.
    ///
    /// `"student"` is an alias for passenger. Anything absent or unrecognized
    /// also lands on passenger — never on a privileged role.
    pub fn normalize(claim: Option<&str>) -> Role {
        match claim {
            Some(CLAIM_ADMIN) => Role::Admin,
            Some(CLAIM_CONDUCTOR) => Role::Conductor,
            Some(CLAIM_PASSENGER) | Some(CLAIM_STUDENT) => Role::Passenger,
            Some(_) | None => Role::Passenger,
        }
    }

    /// Canonical claim string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Passenger => CLAIM_PASSENGER,
            Role::Admin => CLAIM_ADMIN,
            Role::Conductor => CLAIM_CONDUCTOR,
        }
    }

    /// True for roles with elevated privilege relative to passenger.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Conductor)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
