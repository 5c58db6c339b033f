/*
 * Responsibility
 * - v1 entry point (re-exports register())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::register;
