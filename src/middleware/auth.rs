//! Bearer-token guard for protected routes.
//!
//! Rejects requests without a valid, unexpired bearer token before any
//! handler or service code runs. Verified claims are stored as a request
//! extension for handlers that want the caller's identity.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Requires a valid bearer token on the request.
///
/// Verifies the token's signature, expiry, issuer, and audience. An absent,
/// malformed, expired, or foreign token yields 401 Unauthorized without
/// reaching application logic.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        return Err(AppError::Unauthorized);
    };

    let claims = state.tokens.verify(token).map_err(|err| {
        tracing::debug!("Rejected bearer token: {}", err);
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
