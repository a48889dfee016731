/*
 * Responsibility
 * - public surface of the HTTP API (routes() re-export)
 */
mod dto;
mod handlers;
mod routes;

pub use routes::routes;
