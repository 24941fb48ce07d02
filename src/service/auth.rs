//! Authentication service.
//!
//! Pure orchestration: validate the login payload, trim the name, and issue
//! a bearer token. No persistence is involved; sessions are stateless.

use crate::{
    error::AppError,
    model::auth::{LoginDto, LoginResponseDto},
    service::token::TokenIssuer,
    validation::validate_login,
};

pub struct AuthService<'a> {
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    pub fn new(tokens: &'a TokenIssuer) -> Self {
        Self { tokens }
    }

    /// Validates the login request and issues a token for the trimmed name.
    ///
    /// # Returns
    /// - `Ok(LoginResponseDto)` - Token, user name, and lifetime in seconds
    /// - `Err(AppError::Validation)` - Name empty or shorter than 3 characters
    /// - `Err(AppError::TokenErr)` - Token signing failed
    pub fn login(&self, request: LoginDto) -> Result<LoginResponseDto, AppError> {
        if let Err(errors) = validate_login(&request) {
            tracing::warn!("Login validation failed for user: {}", request.name);
            return Err(AppError::Validation(errors));
        }

        let name = request.name.trim();

        tracing::info!("Issuing authentication token for user: {}", name);

        let token = self.tokens.generate(name)?;

        Ok(LoginResponseDto {
            token,
            user_name: name.to_string(),
            expires_in: self.tokens.expiration_in_seconds(),
        })
    }
}
