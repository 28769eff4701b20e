//! Session tokens.
//!
//! Tokens are HS256 JWTs carrying only the user ID and an issue/expiry window of one
//! hour. Signature checking is done by `jsonwebtoken`; the time window is checked by
//! [`validate_claims`] against an explicit `now` so expiry is deterministic in tests.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{token::TokenError, AppError};

/// Lifetime of an issued token in seconds.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Checks the claim time window: valid for `iat <= now < exp`.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenError> {
    let now = now.timestamp();

    if claims.exp <= claims.iat {
        return Err(TokenError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenError::Expired);
    }
    Ok(())
}

/// Issues and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user_id`, valid from `now` for [`TOKEN_TTL_SECS`].
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue(&self, user_id: i32, now: DateTime<Utc>) -> Result<String, AppError> {
        let iat = now.timestamp();
        let claims = Claims {
            user_id,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verifies the signature and the time window of a token.
    ///
    /// # Arguments
    /// - `token` - Encoded token taken from the `Authorization` header
    /// - `now` - Instant the token is checked at
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and inside its window
    /// - `Err(TokenError)` - Why the token was rejected
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by validate_claims against the supplied instant
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)?;
        validate_claims(&data.claims, now)?;

        Ok(data.claims)
    }
}
