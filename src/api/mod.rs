// API layer - HTTP endpoints

pub mod auth;
pub mod entries;
pub mod health;
pub mod logs;
pub mod users;

pub use auth::AuthApi;
pub use entries::EntriesApi;
pub use health::HealthApi;
pub use logs::LogsApi;
pub use users::UsersApi;

use poem_openapi::auth::Bearer;
use poem_openapi::SecurityScheme;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
