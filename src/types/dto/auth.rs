use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::auth::VerifiedUser;
use crate::types::internal::role::Role;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email used as the login handle
    pub email: String,

    /// Password for authentication
    pub password: String,
}

/// Public user identity returned after login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<VerifiedUser> for UserInfo {
    fn from(user: VerifiedUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Success message
    pub message: String,

    /// Signed bearer token, valid for 24 hours
    pub token: String,

    /// The authenticated user
    pub user: UserInfo,
}
