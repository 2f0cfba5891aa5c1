use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prelude::*;

/// Uniform verification failure. Callers must not be able to tell a
/// malformed token from a tampered or expired one.
#[derive(Debug, Error)]
#[error("invalid token")]
pub struct InvalidToken;

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Issues and verifies signed, self-expiring bearer tokens.
/// Verification is stateless: nothing is kept server-side.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: StdDuration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: StdDuration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    pub fn issue(&self, identity: &str) -> Result<String> {
        let ttl = Duration::from_std(self.ttl).context("the token TTL is out of range")?;
        self.issue_expiring_at(identity, Utc::now() + ttl)
    }

    pub fn issue_expiring_at(&self, identity: &str, expires_at: DateTime) -> Result<String> {
        let claims = Claims { sub: identity.to_string(), exp: expires_at.timestamp() };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("failed to sign the token")
    }

    /// Returns the identity claim of a valid token.
    pub fn verify(&self, token: &str) -> StdResult<String, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|error| {
                debug!("rejected a token: {:#}", error);
                InvalidToken
            })
    }
}
