//! Presentation metadata for role badges.
//!
//! Display-only: nothing here carries authorization weight. The lookups
//! normalize first, so any unknown claim resolves to the passenger
//! descriptor instead of failing.

use crate::roles::Role;

/// Display metadata for a role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

const PASSENGER: RoleDescriptor = RoleDescriptor {
    label: "Passenger",
    color: "blue",
    description: "Regular rider; can buy and present tickets",
};

const ADMIN: RoleDescriptor = RoleDescriptor {
    label: "Admin",
    color: "red",
    description: "Back-office administrator; manages users and routes",
};

const CONDUCTOR: RoleDescriptor = RoleDescriptor {
    label: "Conductor",
    color: "green",
    description: "On-board inspector; validates tickets",
};

impl Role {
    /// Descriptor for this role. Total by construction: the enum is closed,
    /// so there is no unmapped case.
    pub fn descriptor(&self) -> &'static RoleDescriptor {
        match self {
            Role::Passenger => &PASSENGER,
            Role::Admin => &ADMIN,
            Role::Conductor => &CONDUCTOR,
        }
    }
}

/// Badge label for a raw claim (normalized first, so unknown claims get the
/// passenger label).
pub fn label_for_claim(claim: Option<&str>) -> &'static str {
    Role::normalize(claim).descriptor().label
}

/// Badge color for a raw claim.
pub fn color_for_claim(claim: Option<&str>) -> &'static str {
    Role::normalize(claim).descriptor().color
}
