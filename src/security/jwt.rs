/// JWT issuing and verification
///
/// Tokens are HS256, signed with a single process-wide secret loaded from
/// the environment at startup. Claims carry the user id and username; there
/// is no expiry and no server-side revocation list, so a token stays valid
/// until the secret rotates. Keys are held in `OnceCell`s, initialized once
/// and immutable afterward.
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// JWT claims: subject is the user id as a UUID string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
}

/// Install the signing secret. Must be called during startup before any
/// token operation; a second call fails.
pub fn initialize_jwt_secret(secret: &str) -> Result<()> {
    JWT_ENCODING_KEY
        .set(EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| AppError::Internal("JWT secret already initialized".to_string()))?;
    JWT_DECODING_KEY
        .set(DecodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| AppError::Internal("JWT secret already initialized".to_string()))?;
    Ok(())
}

/// Issue a token embedding the user's id and username
pub fn issue_token(user_id: Uuid, username: &str) -> Result<String> {
    let key = JWT_ENCODING_KEY
        .get()
        .ok_or_else(|| AppError::Internal("JWT secret not initialized".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: Utc::now().timestamp(),
    };

    encode(&Header::new(JWT_ALGORITHM), &claims, key)
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Verify a token and return its claims. Any malformed, tampered or
/// wrongly-signed token fails as `InvalidToken`.
pub fn verify_token(token: &str) -> Result<Claims> {
    let key = JWT_DECODING_KEY
        .get()
        .ok_or_else(|| AppError::Internal("JWT secret not initialized".to_string()))?;

    // Tokens carry no exp claim, so expiry validation must be off.
    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        // Shared across the test binary; later calls are no-ops.
        let _ = initialize_jwt_secret("test-secret");
    }

    #[test]
    fn issued_token_verifies_to_the_same_identity() {
        init();
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "alice").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn tampered_token_is_rejected() {
        init();
        let token = issue_token(Uuid::new_v4(), "alice").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('a') { 'b' } else { 'a' });
        assert!(matches!(
            verify_token(&tampered),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        init();
        assert!(matches!(
            verify_token("not-a-jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}
