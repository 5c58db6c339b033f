/*
 * Responsibility
 * - Response DTOs for the principal routes
 * - Only ExternalView ever leaves the process; password and level stay inside
 */
use serde::Serialize;

use crate::principal::ExternalView;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    pub from_gateway: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<ExternalView>,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
}
