use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::{AuthError, InternalError};

/// Standardized error response for entry endpoints
#[derive(Object, Debug)]
pub struct EntryErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Entry operation error types
#[derive(ApiResponse, Debug)]
pub enum EntryError {
    /// A required identifying field is missing from the create payload
    #[oai(status = 400)]
    MissingRequiredFields(Json<EntryErrorResponse>),

    /// After role filtering, no updatable field remained in the payload
    #[oai(status = 400)]
    NoValidFields(Json<EntryErrorResponse>),

    /// Token missing, invalid or expired
    #[oai(status = 401)]
    Unauthorized(Json<EntryErrorResponse>),

    /// Caller's role does not permit this action
    #[oai(status = 403)]
    AccessDenied(Json<EntryErrorResponse>),

    /// No entry with the given id
    #[oai(status = 404)]
    EntryNotFound(Json<EntryErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<EntryErrorResponse>),
}

impl EntryError {
    /// Create a MissingRequiredFields error
    pub fn missing_required_fields() -> Self {
        EntryError::MissingRequiredFields(Json(EntryErrorResponse {
            error: "missing_required_fields".to_string(),
            message: "Missing required fields".to_string(),
            status_code: 400,
        }))
    }

    /// Create a NoValidFields error
    pub fn no_valid_fields() -> Self {
        EntryError::NoValidFields(Json(EntryErrorResponse {
            error: "no_valid_fields".to_string(),
            message: "No valid fields to update".to_string(),
            status_code: 400,
        }))
    }

    /// Create an Unauthorized error with the given message
    pub fn unauthorized(message: String) -> Self {
        EntryError::Unauthorized(Json(EntryErrorResponse {
            error: "unauthorized".to_string(),
            message,
            status_code: 401,
        }))
    }

    /// Create an AccessDenied error
    pub fn access_denied() -> Self {
        EntryError::AccessDenied(Json(EntryErrorResponse {
            error: "access_denied".to_string(),
            message: "Access denied".to_string(),
            status_code: 403,
        }))
    }

    /// Create an EntryNotFound error
    pub fn not_found() -> Self {
        EntryError::EntryNotFound(Json(EntryErrorResponse {
            error: "entry_not_found".to_string(),
            message: "Entry not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        EntryError::InternalError(Json(EntryErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            EntryError::MissingRequiredFields(json) => json.0.message.clone(),
            EntryError::NoValidFields(json) => json.0.message.clone(),
            EntryError::Unauthorized(json) => json.0.message.clone(),
            EntryError::AccessDenied(json) => json.0.message.clone(),
            EntryError::EntryNotFound(json) => json.0.message.clone(),
            EntryError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for EntryError {
    fn from(err: InternalError) -> Self {
        EntryError::internal_error(err.to_string())
    }
}

impl From<AuthError> for EntryError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) | AuthError::ExpiredToken(_) => {
                EntryError::unauthorized(err.message())
            }
            AuthError::AccountInactive(_) => EntryError::access_denied(),
            _ => EntryError::internal_error(err.message()),
        }
    }
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
