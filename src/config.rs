use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRES_MINUTES: i64 = 60;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

/// Token signing settings.
///
/// Secret, issuer, and audience have no defaults: their absence is a fatal
/// startup error, never a per-request failure.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expires_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), value))?,
                Err(_) => DEFAULT_PORT,
            },
            jwt: JwtConfig {
                secret: required_var("JWT_SECRET")?,
                issuer: required_var("JWT_ISSUER")?,
                audience: required_var("JWT_AUDIENCE")?,
                expires_minutes: match std::env::var("JWT_EXPIRES_MINUTES") {
                    Ok(value) => value.parse().map_err(|_| {
                        ConfigError::InvalidEnvVar("JWT_EXPIRES_MINUTES".to_string(), value)
                    })?,
                    Err(_) => DEFAULT_JWT_EXPIRES_MINUTES,
                },
            },
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
