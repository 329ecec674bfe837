use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::{CredentialVerifier, TokenService};
use crate::types::dto::auth::{LoginRequest, LoginResponse, UserInfo};

/// Authentication API endpoints
pub struct AuthApi {
    credential_verifier: Arc<CredentialVerifier>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi
    pub fn new(credential_verifier: Arc<CredentialVerifier>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_verifier,
            token_service,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password to receive a bearer token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        if body.email.trim().is_empty() || body.password.is_empty() {
            return Err(AuthError::missing_fields());
        }

        let user = self.credential_verifier.verify(&body.email, &body.password).await?;

        let token = self.token_service.issue(&user.id, user.role)?;

        Ok(Json(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: UserInfo::from(user),
        }))
    }
}
