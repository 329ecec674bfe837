use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::role::Role;

/// Request model for creating a user account
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Role for the new account; only USER and DEV_ADMIN are accepted
    pub role: Role,
}

/// Response model for user creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Success message
    pub message: String,

    /// Id of the created user
    pub user_id: String,
}

/// Response model for the activation toggle
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ToggleActiveResponse {
    /// Success message
    pub message: String,

    /// Id of the affected user
    pub user_id: String,

    /// The new activation state
    pub is_active: bool,
}
