/*
 * Responsibility
 * - /accounts/{account_id} GET / PUT / DELETE (private)
 * - Every access decision goes through Principal::has_access_to_resource
 *
 * Notes
 * - No account storage lives here; the handlers show the authorization flow only.
 */
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::StatusCode,
};
use uuid::Uuid;

use super::authenticated;
use crate::{
    api::v1::dto::accounts::{AccessGrant, AccountResponse, UpdateAccountRequest},
    error::AppError,
    principal::Principal,
};

pub async fn get_account(
    req: Request,
    principal: Option<Principal>,
) -> Result<Json<AccountResponse>, AppError> {
    let principal = authenticated(principal)?;
    let (account_id, _req) = account_id(req).await?;
    let access = authorize(&principal, account_id)?;

    Ok(Json(AccountResponse {
        account_id,
        principal_id: principal.id,
        access,
        label: None,
    }))
}

pub async fn update_account(
    req: Request,
    principal: Option<Principal>,
) -> Result<Json<AccountResponse>, AppError> {
    let principal = authenticated(principal)?;
    let (account_id, req) = account_id(req).await?;
    let access = authorize(&principal, account_id)?;

    let Json(body) = Json::<UpdateAccountRequest>::from_request(req, &())
        .await
        .map_err(|rejection| AppError::bad_request("INVALID_BODY", rejection.body_text()))?;
    body.validate()
        .map_err(|msg| AppError::bad_request("INVALID_BODY", msg))?;

    Ok(Json(AccountResponse {
        account_id,
        principal_id: principal.id,
        access,
        label: Some(body.label),
    }))
}

pub async fn delete_account(
    req: Request,
    principal: Option<Principal>,
) -> Result<StatusCode, AppError> {
    let principal = authenticated(principal)?;
    let (account_id, _req) = account_id(req).await?;
    authorize(&principal, account_id)?;

    tracing::info!(%account_id, principal_id = %principal.id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn account_id(req: Request) -> Result<(Uuid, Request), AppError> {
    let (mut parts, body) = req.into_parts();
    let Path(account_id) = Path::<Uuid>::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::bad_request("INVALID_ACCOUNT_ID", "invalid account id"))?;
    Ok((account_id, Request::from_parts(parts, body)))
}

fn authorize(principal: &Principal, account_id: Uuid) -> Result<AccessGrant, AppError> {
    if !principal.has_access_to_resource(account_id) {
        tracing::debug!(%account_id, principal_id = %principal.id, "account access denied");
        return Err(AppError::Forbidden);
    }

    if principal.accounts.contains(&account_id) {
        Ok(AccessGrant::Owner)
    } else {
        Ok(AccessGrant::Admin)
    }
}
