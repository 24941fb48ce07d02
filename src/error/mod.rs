//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto, validation::ValidationErrors};

/// Generic message returned for any failure the client cannot act on.
///
/// Internal details are logged server-side and never cross the boundary.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal error while processing the request. Try again later.";

/// Message wrapping a field-error map on validation failure.
pub const VALIDATION_ERROR_MESSAGE: &str = "One or more validation errors occurred";

/// Top-level application error type.
///
/// Aggregates all error kinds that can surface from the request pipeline and
/// provides the single deterministic mapping to HTTP responses. The three
/// recoverable kinds (`Validation`, `NotFound`, `Domain`) propagate unchanged
/// from the services; everything else is treated as unclassified and reduced
/// to a generic 500 body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload failed one or more validation rules.
    ///
    /// Carries the field → messages mapping produced by the rule tables.
    /// Results in 400 Bad Request with the mapping echoed in the body.
    #[error("{VALIDATION_ERROR_MESSAGE}")]
    Validation(ValidationErrors),

    /// An id-based lookup returned no live record.
    ///
    /// Results in 404 Not Found with the provided entity message.
    #[error("{0}")]
    NotFound(String),

    /// Domain rule violation.
    ///
    /// Reserved for business-rule failures beyond validation and lookup.
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Domain(String),

    /// Bearer token absent, malformed, expired, or signed with the wrong key.
    ///
    /// Raised by the auth middleware before any handler runs. Results in
    /// 401 Unauthorized.
    #[error("Invalid or missing bearer token")]
    Unauthorized,

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token signing failure.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Socket setup or server I/O failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to its status code and JSON body. Recoverable
/// kinds echo their message (and field errors for validation); internal
/// errors are logged with full detail but return a generic message to avoid
/// information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation` (with field errors) and `Domain`
/// - 401 Unauthorized - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: VALIDATION_ERROR_MESSAGE.to_string(),
                    errors: Some(errors),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::message(msg))).into_response()
            }
            Self::Domain(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::message(msg))).into_response()
            }
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::message(self.to_string())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic internal-error message to
/// the client. Used as the fallback for errors that have no specific HTTP
/// response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::message(INTERNAL_ERROR_MESSAGE.to_string())),
        )
            .into_response()
    }
}
