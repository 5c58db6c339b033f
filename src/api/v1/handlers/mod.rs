pub mod accounts;
pub mod health;
pub mod principals;

use crate::error::AppError;
use crate::principal::Principal;

/// Private routes never run without a principal; this keeps handlers total anyway.
pub(crate) fn authenticated(principal: Option<Principal>) -> Result<Principal, AppError> {
    principal.ok_or(AppError::Unauthenticated)
}
