//! Application services orchestrating validation, persistence, and token
//! issuance.

pub mod auth;
pub mod client;
pub mod token;
