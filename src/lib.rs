//! Identity-aware request dispatch in front of an axum server.
//!
//! An upstream gateway authenticates callers and writes the resulting principal into the
//! `AuthUser` header. This crate decodes it per request, gates private routes on its presence,
//! and hands `Option<Principal>` to handlers, which authorize per resource through
//! [`Principal::has_access_to_resource`](principal::Principal::has_access_to_resource).

pub mod api;
pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod middleware;
pub mod principal;
pub mod services;
