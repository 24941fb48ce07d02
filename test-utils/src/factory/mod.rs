//! Factories for creating test entities with sensible defaults.

pub mod client;
pub mod helpers;
