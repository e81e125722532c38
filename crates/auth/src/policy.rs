//! Capability queries over a claim source.
//!
//! - No IO
//! - No panics
//! - No state (every call is independent and safe under any concurrency)
//!
//! Admin and conductor checks are deliberately strict on the RAW claim while
//! the passenger check goes through normalization. The asymmetry is the
//! security default: a missing, malformed, or unrecognized claim is always a
//! passenger and never a privileged role.

use crate::claims::ClaimSource;
use crate::roles::{CLAIM_ADMIN, CLAIM_CONDUCTOR, Role};

/// Canonical role for whatever the source reports (absent claims included).
pub fn classify<S: ClaimSource>(source: &S) -> Role {
    Role::normalize(source.role_claim())
}

/// True iff the raw claim is exactly `"admin"`. No normalization: an alias
/// or absent claim can never pass this check.
pub fn is_admin<S: ClaimSource>(source: &S) -> bool {
    source.role_claim() == Some(CLAIM_ADMIN)
}

/// True iff the raw claim is exactly `"conductor"`.
pub fn is_conductor<S: ClaimSource>(source: &S) -> bool {
    source.role_claim() == Some(CLAIM_CONDUCTOR)
}

/// True iff the source classifies as passenger. This one IS normalized, so
/// `"student"`-mapped, absent, and unrecognized claims all satisfy it.
pub fn is_passenger<S: ClaimSource>(source: &S) -> bool {
    classify(source) == Role::Passenger
}

/// True for any elevated role (admin or conductor).
pub fn has_staff_role<S: ClaimSource>(source: &S) -> bool {
    is_admin(source) || is_conductor(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{UserMetadata, UserRecord};
    use proptest::prelude::*;

    fn record_with_role(role: &str) -> UserRecord {
        UserRecord {
            user_metadata: Some(UserMetadata {
                role: Some(role.to_string()),
                full_name: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn absent_record_classifies_as_passenger() {
        let none: Option<UserRecord> = None;
        assert_eq!(classify(&none), Role::Passenger);
        assert!(is_passenger(&none));
        assert!(!is_admin(&none));
        assert!(!is_conductor(&none));
        assert!(!has_staff_role(&none));
    }

    #[test]
    fn admin_check_is_strict_on_the_raw_claim() {
        assert!(is_admin(&record_with_role("admin")));
        assert!(!is_admin(&record_with_role("student")));
        assert!(!is_admin(&record_with_role("Admin")));
        assert!(!is_admin(&UserRecord::default()));
    }

    #[test]
    fn conductor_check_is_strict_on_the_raw_claim() {
        assert!(is_conductor(&record_with_role("conductor")));
        assert!(!is_conductor(&record_with_role("admin")));
        assert!(!is_conductor(&UserRecord::default()));
    }

    #[test]
    fn passenger_check_is_normalized() {
        assert!(is_passenger(&record_with_role("passenger")));
        assert!(is_passenger(&record_with_role("student")));
        assert!(is_passenger(&record_with_role("something-else")));
        assert!(!is_passenger(&record_with_role("conductor")));
        assert!(!is_passenger(&record_with_role("admin")));
    }

    #[test]
    fn conductor_record_is_staff_but_not_passenger() {
        let record = record_with_role("conductor");
        assert_eq!(classify(&record), Role::Conductor);
        assert!(has_staff_role(&record));
        assert!(!is_passenger(&record));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: staff is exactly the union of the two strict checks,
        /// for any claim whatsoever.
        #[test]
        fn staff_equals_admin_or_conductor(claim in proptest::option::of(".*")) {
            let record = match &claim {
                Some(role) => record_with_role(role),
                None => UserRecord::default(),
            };
            prop_assert_eq!(
                has_staff_role(&record),
                is_admin(&record) || is_conductor(&record)
            );
        }

        /// Property: every source is either passenger or staff, never both
        /// and never neither.
        #[test]
        fn passenger_and_staff_partition_all_inputs(claim in proptest::option::of(".*")) {
            let record = match &claim {
                Some(role) => record_with_role(role),
                None => UserRecord::default(),
            };
            prop_assert_ne!(is_passenger(&record), has_staff_role(&record));
        }
    }
}
