use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with a display name.
///
/// Issues a signed, time-limited bearer token for the supplied name. No
/// account is required; the name is only validated and embedded in the
/// token claims.
///
/// # Arguments
/// - `state` - Application state containing the token issuer
/// - `payload` - Login data (display name)
///
/// # Returns
/// - `200 OK` - Token, user name, and lifetime in seconds
/// - `400 Bad Request` - Name empty or shorter than 3 characters
/// - `500 Internal Server Error` - Token signing failure
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully issued token", body = LoginResponseDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Login requested for user: {}", payload.name);

    let response = AuthService::new(&state.tokens).login(payload)?;

    Ok(Json(response))
}
