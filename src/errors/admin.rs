use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::{AuthError, InternalError};
use crate::types::internal::role::Role;

/// Standardized error response for user-management endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// User-management error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// A required field is missing from the request
    #[oai(status = 400)]
    MissingFields(Json<AdminErrorResponse>),

    /// Requested role is outside the allowed set for created accounts
    #[oai(status = 400)]
    InvalidRole(Json<AdminErrorResponse>),

    /// Email already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<AdminErrorResponse>),

    /// Token missing, invalid or expired
    #[oai(status = 401)]
    Unauthorized(Json<AdminErrorResponse>),

    /// Caller's role does not permit this action
    #[oai(status = 403)]
    AccessDenied(Json<AdminErrorResponse>),

    /// Actors may not change their own activation state
    #[oai(status = 403)]
    CannotModifySelf(Json<AdminErrorResponse>),

    /// No user with the given id
    #[oai(status = 404)]
    UserNotFound(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    /// Create a MissingFields error
    pub fn missing_fields() -> Self {
        AdminError::MissingFields(Json(AdminErrorResponse {
            error: "missing_fields".to_string(),
            message: "All fields required".to_string(),
            status_code: 400,
        }))
    }

    /// Create an InvalidRole error
    pub fn invalid_role(role: Role) -> Self {
        AdminError::InvalidRole(Json(AdminErrorResponse {
            error: "invalid_role".to_string(),
            message: format!("Invalid role: {}", role),
            status_code: 400,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AdminError::DuplicateEmail(Json(AdminErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already exists".to_string(),
            status_code: 400,
        }))
    }

    /// Create an Unauthorized error with the given message
    pub fn unauthorized(message: String) -> Self {
        AdminError::Unauthorized(Json(AdminErrorResponse {
            error: "unauthorized".to_string(),
            message,
            status_code: 401,
        }))
    }

    /// Create an AccessDenied error
    pub fn access_denied() -> Self {
        AdminError::AccessDenied(Json(AdminErrorResponse {
            error: "access_denied".to_string(),
            message: "Access denied".to_string(),
            status_code: 403,
        }))
    }

    /// Create a CannotModifySelf error
    pub fn cannot_modify_self() -> Self {
        AdminError::CannotModifySelf(Json(AdminErrorResponse {
            error: "cannot_modify_self".to_string(),
            message: "You cannot deactivate yourself".to_string(),
            status_code: 403,
        }))
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user_id: &str) -> Self {
        AdminError::UserNotFound(Json(AdminErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("User not found: {}", user_id),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AdminError::MissingFields(json) => json.0.message.clone(),
            AdminError::InvalidRole(json) => json.0.message.clone(),
            AdminError::DuplicateEmail(json) => json.0.message.clone(),
            AdminError::Unauthorized(json) => json.0.message.clone(),
            AdminError::AccessDenied(json) => json.0.message.clone(),
            AdminError::CannotModifySelf(json) => json.0.message.clone(),
            AdminError::UserNotFound(json) => json.0.message.clone(),
            AdminError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AdminError {
    fn from(err: InternalError) -> Self {
        AdminError::internal_error(err.to_string())
    }
}

impl From<AuthError> for AdminError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) | AuthError::ExpiredToken(_) => {
                AdminError::unauthorized(err.message())
            }
            AuthError::AccountInactive(_) => AdminError::access_denied(),
            _ => AdminError::internal_error(err.message()),
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
