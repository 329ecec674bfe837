use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Generic acknowledgement response
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AckResponse {
    /// Success message
    pub message: String,
}
