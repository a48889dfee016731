/*
 * Responsibility
 * - router-level middleware shared by every route
 */
pub mod cors;
pub mod http;
