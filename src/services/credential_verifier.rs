use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use std::fmt;
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::stores::UserStore;
use crate::types::internal::auth::VerifiedUser;

/// Checks login credentials against stored Argon2id hashes
///
/// Read-only: a failed or successful check never mutates anything. The
/// activation gate is applied before the password result is surfaced, so an
/// inactive account with the right password reports AccountInactive rather
/// than InvalidCredentials.
pub struct CredentialVerifier {
    user_store: Arc<UserStore>,
    password_pepper: String,
}

impl CredentialVerifier {
    /// Create a new CredentialVerifier
    ///
    /// # Arguments
    /// * `user_store` - Store used to resolve login handles
    /// * `password_pepper` - Process-wide secret mixed into every hash
    pub fn new(user_store: Arc<UserStore>, password_pepper: String) -> Self {
        Self {
            user_store,
            password_pepper,
        }
    }

    fn argon2(&self) -> Result<Argon2<'_>, AuthError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| AuthError::internal_error(format!("Failed to initialize Argon2: {}", e)))
    }

    /// Hash a plaintext password for storage
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::internal_error(format!("Password hashing error: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify email/password and return the account identity on success
    pub async fn verify(&self, email: &str, password: &str) -> Result<VerifiedUser, AuthError> {
        let user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(AuthError::invalid_credentials)?;

        // activation gate comes first: a correct password on a deactivated
        // account must not read as a credential failure
        if !user.is_active {
            return Err(AuthError::account_inactive());
        }

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|_| AuthError::invalid_credentials())?;

        self.argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        let role = user
            .role
            .parse()
            .map_err(|e| AuthError::internal_error(format!("Corrupt role column: {}", e)))?;

        Ok(VerifiedUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
        })
    }
}

impl fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("user_store", &"<store>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}
