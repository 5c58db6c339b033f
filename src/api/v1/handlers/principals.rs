/*
 * Responsibility
 * - /whoami (public): reports what the dispatch gate resolved for this request
 * - /me (private): the caller's redacted view
 * - /principals/validate (public): data-entry check for a new principal record
 */
use axum::{
    Json,
    extract::{FromRequest, Request},
};

use super::authenticated;
use crate::{
    api::v1::dto::principals::{ValidationResponse, WhoAmIResponse},
    dispatch::is_from_trusted_gateway,
    error::AppError,
    principal::{ExternalView, Principal},
};

pub async fn whoami(req: Request, principal: Option<Principal>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        authenticated: principal.is_some(),
        from_gateway: is_from_trusted_gateway(&req),
        principal: principal.as_ref().map(Principal::external_view),
    })
}

pub async fn me(
    _req: Request,
    principal: Option<Principal>,
) -> Result<Json<ExternalView>, AppError> {
    let principal = authenticated(principal)?;
    Ok(Json(principal.external_view()))
}

pub async fn validate_principal(
    req: Request,
    _principal: Option<Principal>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(candidate) = Json::<Principal>::from_request(req, &())
        .await
        .map_err(|rejection| AppError::bad_request("INVALID_BODY", rejection.body_text()))?;

    candidate.validate(true)?;

    Ok(Json(ValidationResponse { valid: true }))
}
