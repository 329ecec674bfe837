use thiserror::Error;

/// Internal error type for store and service operations
///
/// Not exposed via the API - endpoints convert to the area error enums,
/// which map everything here onto a 500.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("File storage error: {operation} failed: {source}")]
    FileStorage {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn file_storage(operation: &str, source: std::io::Error) -> Self {
        InternalError::FileStorage {
            operation: operation.to_string(),
            source,
        }
    }
}
