/*
 * Responsibility
 * - Permission tiers carried by a Principal
 * - The wire form is the bare integer (5 / 12 / 20 / 25); other systems read it as-is
 *
 * Notes
 * - Decoding never fails: integers outside the known tiers are kept as `Unrecognized`.
 *   The gateway writes 0 when no tier was assigned.
 * - Only value 20 (Admin) bypasses resource-ownership checks.
 *   Operator and System are reserved tiers and currently behave like User.
 * - Equality and ordering follow the numeric value.
 */
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

const USER: i64 = 5;
const OPERATOR: i64 = 12;
const ADMIN: i64 = 20;
const SYSTEM: i64 = 25;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PermissionLevel {
    #[default]
    User,
    Operator,
    Admin,
    System,
    Unrecognized(i64),
}

impl PermissionLevel {
    /// The known tiers, lowest first.
    pub const ALL: [PermissionLevel; 4] = [Self::User, Self::Operator, Self::Admin, Self::System];

    pub fn value(self) -> i64 {
        match self {
            Self::User => USER,
            Self::Operator => OPERATOR,
            Self::Admin => ADMIN,
            Self::System => SYSTEM,
            Self::Unrecognized(value) => value,
        }
    }

    pub fn is_recognized(self) -> bool {
        matches!(self.value(), USER | OPERATOR | ADMIN | SYSTEM)
    }

    /// Whether this tier skips the per-resource ownership check entirely.
    pub fn bypasses_ownership(self) -> bool {
        self.value() == ADMIN
    }
}

impl From<i64> for PermissionLevel {
    fn from(value: i64) -> Self {
        match value {
            USER => Self::User,
            OPERATOR => Self::Operator,
            ADMIN => Self::Admin,
            SYSTEM => Self::System,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<PermissionLevel> for i64 {
    fn from(level: PermissionLevel) -> Self {
        level.value()
    }
}

impl PartialEq for PermissionLevel {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for PermissionLevel {}

impl Hash for PermissionLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for PermissionLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PermissionLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}
