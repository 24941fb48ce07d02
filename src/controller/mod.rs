//! HTTP request handlers.
//!
//! Controllers deserialize request DTOs, call the application services, and
//! map results to status codes and JSON bodies. Error translation lives in
//! the `error` module; handlers just return `Result<_, AppError>`.

pub mod auth;
pub mod client;
