use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::admin::AdminError;
use crate::services::{AdminService, TokenService};
use crate::types::dto::users::{CreateUserRequest, CreateUserResponse, ToggleActiveResponse};

/// User management API endpoints (SUPER_ADMIN only)
pub struct UsersApi {
    token_service: Arc<TokenService>,
    admin_service: Arc<AdminService>,
}

impl UsersApi {
    /// Create a new UsersApi
    pub fn new(token_service: Arc<TokenService>, admin_service: Arc<AdminService>) -> Self {
        Self {
            token_service,
            admin_service,
        }
    }
}

/// API tags for user management endpoints
#[derive(Tags)]
enum UserTags {
    /// User management endpoints
    Users,
}

#[OpenApi]
impl UsersApi {
    /// Create a staff or dev-admin account
    #[oai(path = "/users", method = "post", tag = "UserTags::Users")]
    async fn create_user(
        &self,
        auth: BearerAuth,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<CreateUserResponse>, AdminError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        let user_id = self.admin_service.create_user(&claims, body.0).await?;

        Ok(Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id,
        }))
    }

    /// Toggle a user's activation state
    #[oai(
        path = "/users/:id/toggle-active",
        method = "patch",
        tag = "UserTags::Users"
    )]
    async fn toggle_active(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<ToggleActiveResponse>, AdminError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        let is_active = self.admin_service.toggle_user_active(&claims, &id.0).await?;

        let message = if is_active {
            "User activated successfully"
        } else {
            "User deactivated successfully"
        };

        Ok(Json(ToggleActiveResponse {
            message: message.to_string(),
            user_id: id.0,
            is_active,
        }))
    }
}
