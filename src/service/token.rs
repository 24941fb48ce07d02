//! Signed bearer token issuance and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtConfig;

/// Claims carried by every issued token.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    /// Subject identifier, freshly generated per token.
    pub sub: String,
    /// Display name supplied at login.
    pub name: String,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Unique token identifier.
    pub jti: String,
    /// Expiry, Unix seconds.
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Issues and verifies HS256 bearer tokens.
///
/// Built once at startup from `JwtConfig` and shared read-only through the
/// application state. Token generation and verification are pure,
/// non-blocking computations.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expires_minutes: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            expires_minutes: config.expires_minutes,
        }
    }

    /// Generates a signed, self-contained token for the given display name.
    ///
    /// Claims carry a fresh subject id, the name, issued-at, a unique token
    /// id, and an expiry `expires_minutes` from now.
    pub fn generate(&self, name: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            name: name.to_string(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: (now + chrono::Duration::minutes(self.expires_minutes)).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// The configured token lifetime in seconds.
    pub fn expiration_in_seconds(&self) -> i64 {
        self.expires_minutes * 60
    }

    /// Verifies a presented token: signature, expiry, issuer, and audience.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}
