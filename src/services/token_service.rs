use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::errors::auth::AuthError;
use crate::types::internal::auth::Claims;
use crate::types::internal::role::Role;

/// Manages bearer token generation and validation
///
/// Tokens embed `{sub, role}` and expire 24 hours after issuance. Validity is
/// decided from signature and expiry alone - the datastore is never
/// consulted, so deactivating a user does not revoke tokens already in the
/// wild (accepted staleness window, bounded by the expiry). Rotating the
/// signing secret invalidates every outstanding token.
pub struct TokenService {
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            token_ttl_hours: 24,
        }
    }

    /// Issue a signed token for the given user id and role
    pub fn issue(&self, user_id: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now,
            exp: now + self.token_ttl_hours * 3600,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::internal_error(format!("Failed to sign token: {}", e)))
    }

    /// Validate a token and return the claims embedded at issuance
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::expired_token(),
            _ => AuthError::invalid_token(),
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> TokenService {
        TokenService::new("test-secret-key-minimum-32-characters-long".to_string())
    }

    #[test]
    fn test_issue_and_verify_round_trips_claims() {
        let service = test_service();

        let token = service.issue("user-1", Role::DevAdmin).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::DevAdmin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_expiry_is_24_hours_after_issuance() {
        let service = test_service();

        let token = service.issue("user-1", Role::User).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_verify_fails_with_wrong_secret() {
        let service = test_service();
        let other = TokenService::new("a-completely-different-signing-secret".to_string());

        let token = service.issue("user-1", Role::User).unwrap();
        let result = other.verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_fails_with_garbage_token() {
        let service = test_service();

        let result = service.verify("not-a-token");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_rejects_token_issued_25_hours_ago() {
        let service = test_service();

        let now = Utc::now().timestamp();
        let stale_claims = Claims {
            sub: "user-1".to_string(),
            role: Role::SuperAdmin,
            iat: now - 25 * 3600,
            exp: now - 3600,
        };
        let stale_token = encode(
            &Header::new(Algorithm::HS256),
            &stale_claims,
            &EncodingKey::from_secret("test-secret-key-minimum-32-characters-long".as_bytes()),
        )
        .unwrap();

        let result = service.verify(&stale_token);

        assert!(matches!(result, Err(AuthError::ExpiredToken(_))));
    }

    #[test]
    fn test_debug_does_not_expose_secret() {
        let service = test_service();

        let debug_output = format!("{:?}", service);

        assert!(!debug_output.contains("test-secret-key"));
        assert!(debug_output.contains("<redacted>"));
    }
}
