/*
 * Responsibility
 * - Per-request identity extraction from the `AuthUser` header
 * - The gateway-trust signal (`API_GATEWAY` header presence)
 *
 * Notes
 * - Missing header, empty value, non-UTF-8 bytes, malformed JSON and a nil id all collapse to
 *   `None`. Callers cannot tell them apart, and neither can the client.
 * - The gateway signal is advisory only. It trusts network topology and upstream header hygiene;
 *   it is not proof of anything and must not be used as an authorization mechanism on its own.
 */
use axum::http::{HeaderMap, Request};

use crate::principal::Principal;

pub const AUTH_USER_HEADER: &str = "AuthUser";
pub const API_GATEWAY_HEADER: &str = "API_GATEWAY";

pub fn resolve_principal(headers: &HeaderMap) -> Option<Principal> {
    let raw = headers.get(AUTH_USER_HEADER)?.as_bytes();

    let principal = match serde_json::from_slice::<Principal>(raw) {
        Ok(p) => p,
        Err(err) => {
            // never echoed back; the request simply continues unauthenticated
            tracing::trace!(error = %err, "identity header rejected");
            return None;
        }
    };

    principal.is_present().then_some(principal)
}

pub fn is_from_trusted_gateway<B>(req: &Request<B>) -> bool {
    gateway_marker_present(req.headers())
}

pub fn gateway_marker_present(headers: &HeaderMap) -> bool {
    headers
        .get(API_GATEWAY_HEADER)
        .is_some_and(|v| !v.is_empty())
}
