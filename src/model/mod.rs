//! Request and response DTOs for the HTTP surface.
//!
//! All wire types serialize with camelCase field naming. Response DTOs are
//! pure field projections of the entity models; `deleted_at` is never
//! exposed.

pub mod api;
pub mod auth;
pub mod client;
