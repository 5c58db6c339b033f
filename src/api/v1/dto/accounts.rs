/*
 * Responsibility
 * - Account request/response DTOs
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the caller reached the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessGrant {
    Owner,
    Admin,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account_id: Uuid,
    pub principal_id: Uuid,
    pub access: AccessGrant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub label: String,
}

pub const LABEL_MAX_CHARS: usize = 256;

impl UpdateAccountRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.label.trim().is_empty() {
            return Err("label is required");
        }
        if self.label.chars().count() > LABEL_MAX_CHARS {
            return Err("label must be <= 256 chars");
        }
        Ok(())
    }
}
