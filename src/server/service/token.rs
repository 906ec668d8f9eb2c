//! Access token issuing and verification.
//!
//! Tokens are HS256 JSON Web Tokens signed with the configured secret. They carry the
//! user's id, username and full name and expire after a configurable lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub id: i32,
    pub username: String,
    /// Full name of the user.
    pub name: String,
    /// Issued-at timestamp in seconds.
    pub iat: i64,
    /// Expiry timestamp in seconds.
    pub exp: i64,
}

/// Creates and verifies signed access tokens.
///
/// Cheap to clone; stored in `AppState` and shared by the login handler and the
/// authentication middleware.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues an access token for `user`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            name: user.full_name(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|source| InternalError::TokenEncoding { source })
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::ExpiredToken)` - Signature is valid but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Any other failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}
