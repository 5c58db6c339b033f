/*
 * Responsibility
 * - Public interface of the middleware layer (re-export)
 * - Transport-level layers shared by every served router
 */
pub mod http;
