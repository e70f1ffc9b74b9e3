//! Token service for verifying JWT bearer tokens.
//!
//! Tokens are HS256-signed with the configured secret and issued elsewhere.
//! Verification checks the signature and expiry only: issuer and audience are
//! not validated.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

use crate::server::{error::auth::AuthError, model::auth::Claims};

/// Service holding the verification key derived from the JWT secret.
///
/// Cloned into every request through `AppState`; clones share the key.
#[derive(Clone)]
pub struct TokenService {
    decoding_key: Arc<DecodingKey>,
}

impl TokenService {
    /// Creates a new TokenService from the raw secret bytes.
    ///
    /// # Arguments
    /// - `secret` - Symmetric signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(secret)),
        }
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature valid and token not expired
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}
