use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::{AuthError, InternalError};

/// Standardized error response for the log review endpoint
#[derive(Object, Debug)]
pub struct LogErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Log review error types
#[derive(ApiResponse, Debug)]
pub enum LogError {
    /// Token missing, invalid or expired
    #[oai(status = 401)]
    Unauthorized(Json<LogErrorResponse>),

    /// Caller's role does not permit log review
    #[oai(status = 403)]
    AccessDenied(Json<LogErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<LogErrorResponse>),
}

impl LogError {
    /// Create an Unauthorized error with the given message
    pub fn unauthorized(message: String) -> Self {
        LogError::Unauthorized(Json(LogErrorResponse {
            error: "unauthorized".to_string(),
            message,
            status_code: 401,
        }))
    }

    /// Create an AccessDenied error
    pub fn access_denied() -> Self {
        LogError::AccessDenied(Json(LogErrorResponse {
            error: "access_denied".to_string(),
            message: "Access denied".to_string(),
            status_code: 403,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        LogError::InternalError(Json(LogErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            LogError::Unauthorized(json) => json.0.message.clone(),
            LogError::AccessDenied(json) => json.0.message.clone(),
            LogError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for LogError {
    fn from(err: InternalError) -> Self {
        LogError::internal_error(err.to_string())
    }
}

impl From<AuthError> for LogError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) | AuthError::ExpiredToken(_) => {
                LogError::unauthorized(err.message())
            }
            _ => LogError::internal_error(err.message()),
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
