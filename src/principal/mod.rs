/*
 * Responsibility
 * - The authenticated actor of a request (Principal) and its authorization predicate
 * - Pure data + predicate logic; no I/O
 *
 * Notes
 * - A Principal arrives serialized in a request header and is decoded fresh per request.
 *   Nothing here caches or persists it.
 * - The nil UUID means "no identity". Callers branch on `Option<Principal>` (see dispatch),
 *   never on field values.
 */
mod level;
mod region;
mod validation;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub use level::PermissionLevel;
pub use region::{Region, UnknownRegion, is_valid_region, regions};
pub use validation::{PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, ValidationError, is_valid_email};

/// Identity payload written by the upstream gateway.
///
/// Missing or `null` fields decode to their defaults, matching what the gateway's encoder
/// emits for zero values. No integrity check is performed: the decoded value is exactly what
/// the header claims.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Principal {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Empty when the principal has no phone number.
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: PermissionLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

/// Redacted projection safe to return to untrusted callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalView {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    #[serde(rename = "activated")]
    pub verified: bool,
    pub name: String,
    pub region: String,
    pub accounts: Vec<Uuid>,
}

impl Principal {
    pub fn is_present(&self) -> bool {
        !self.id.is_nil()
    }

    pub fn validate(&self, is_new: bool) -> Result<(), ValidationError> {
        validation::validate(self, is_new)
    }

    /// The sole resource-level authorization primitive.
    ///
    /// Admin passes for every resource. Every other tier, Operator and System included,
    /// must list the resource in `accounts`.
    pub fn has_access_to_resource(&self, resource: Uuid) -> bool {
        self.level.bypasses_ownership() || self.accounts.contains(&resource)
    }

    pub fn external_view(&self) -> ExternalView {
        ExternalView {
            id: self.id,
            email: self.email.clone(),
            phone: self.phone.clone(),
            verified: self.verified,
            name: self.name.clone(),
            region: self.region.clone(),
            accounts: self.accounts.clone(),
        }
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("verified", &self.verified)
            .field("active", &self.active)
            .field("region", &self.region)
            .field("name", &self.name)
            .field("level", &self.level)
            .field("accounts", &self.accounts)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// the gateway encodes unset fields (an empty account list included) as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
