/*
 * Responsibility
 * - Thin wrappers around third-party data the principal model consults (phone numbering plan)
 */
pub mod phone;
