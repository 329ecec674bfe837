use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::log::LogError;
use crate::services::authorizer::{self, Action};
use crate::services::TokenService;
use crate::stores::LogStore;
use crate::types::dto::logs::LogResponse;

/// Audit log review API endpoints
pub struct LogsApi {
    token_service: Arc<TokenService>,
    log_store: Arc<LogStore>,
}

impl LogsApi {
    /// Create a new LogsApi
    pub fn new(token_service: Arc<TokenService>, log_store: Arc<LogStore>) -> Self {
        Self {
            token_service,
            log_store,
        }
    }
}

/// API tags for log endpoints
#[derive(Tags)]
enum LogTags {
    /// Audit log endpoints
    Logs,
}

#[OpenApi]
impl LogsApi {
    /// List audit log rows with actor and entry context (admin roles only)
    #[oai(path = "/logs", method = "get", tag = "LogTags::Logs")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<LogResponse>>, LogError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        if !authorizer::can_perform(claims.role, Action::ViewLogs) {
            return Err(LogError::access_denied());
        }

        let logs = self
            .log_store
            .list_with_context()
            .await?
            .into_iter()
            .map(LogResponse::from)
            .collect();

        Ok(Json(logs))
    }
}
