use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something that can yield a raw role claim.
///
/// The policy layer depends on this capability instead of any concrete user
/// record shape, so the identity provider's schema can change (or be mocked)
/// without touching the policy. Absence of a claim is a normal, expected
/// answer, not an error.
pub trait ClaimSource {
    /// The raw, unvalidated role claim, if one is present.
    fn role_claim(&self) -> Option<&str>;
}

/// User metadata blob as the identity provider stores it.
///
/// Providers treat this as free-form JSON; only the fields we read are
/// modeled, and all of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Identity-provider user record (transport-agnostic).
///
/// Session retrieval and token verification happen outside this crate; this
/// is the minimal shape we expect once a session has been resolved. Every
/// field is optional so a partial or malformed payload deserializes to a
/// record with absent fields rather than failing — malformed input must end
/// up unprivileged, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl UserRecord {
    /// Build a record from a raw provider payload.
    ///
    /// A payload that does not fit the expected shape yields the empty record
    /// (all fields absent), which classifies as passenger downstream.
    pub fn from_value(value: serde_json::Value) -> UserRecord {
        serde_json::from_value(value).unwrap_or_default()
    }
}

impl ClaimSource for UserRecord {
    fn role_claim(&self) -> Option<&str> {
        self.user_metadata
            .as_ref()
            .and_then(|meta| meta.role.as_deref())
    }
}

/// Raw JSON payloads can act as a claim source directly: follow
/// `user_metadata.role` and treat anything that is not a string as absent.
impl ClaimSource for serde_json::Value {
    fn role_claim(&self) -> Option<&str> {
        self.get("user_metadata")
            .and_then(|meta| meta.get("role"))
            .and_then(|role| role.as_str())
    }
}

impl<S: ClaimSource> ClaimSource for Option<S> {
    fn role_claim(&self) -> Option<&str> {
        self.as_ref().and_then(ClaimSource::role_claim)
    }
}

impl<S: ClaimSource + ?Sized> ClaimSource for &S {
    fn role_claim(&self) -> Option<&str> {
        (**self).role_claim()
    }
}

/// A bare claim string is its own source; `Option<&str>` composes via the
/// `Option` impl above. Useful for tests and for callers that already hold
/// the extracted claim.
impl ClaimSource for str {
    fn role_claim(&self) -> Option<&str> {
        Some(self)
    }
}
