/*!
 * Dispatch manager
 *
 * Responsibility:
 * - Route registration with an identity gate in front of every handler
 * - Handlers receive `(Request, Option<Principal>)`; private routes only ever see `Some`
 *
 * Public API:
 * - DispatchManager, Access, ServeError
 * - EndpointHandler + get / post / put / delete
 * - identity::{resolve_principal, is_from_trusted_gateway}
 */
mod endpoint;
pub mod identity;
mod manager;

pub use endpoint::{
    EndpointHandler, HandlerFuture, RouteHandler, UnsupportedVerb, Verb, delete, get, post, put,
};
pub use identity::{API_GATEWAY_HEADER, AUTH_USER_HEADER, is_from_trusted_gateway};
pub use manager::{Access, DEFAULT_LISTEN_ADDR, DispatchManager, ServeError};
