// Error layer - transport-facing ApiResponse enums per API area, plus the
// internal error type used by stores and services

pub mod admin;
pub mod auth;
pub mod entry;
pub mod internal;
pub mod log;

pub use admin::AdminError;
pub use auth::AuthError;
pub use entry::EntryError;
pub use internal::InternalError;
pub use log::LogError;
