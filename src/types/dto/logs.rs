use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::stores::log_store::LogWithContext;

/// Audit log row joined with actor identity and entry references
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub id: i64,
    pub action: String,
    pub description: String,
    pub created_at: String,
    pub user_name: String,
    pub user_email: String,
    /// Invoice number of the referenced entry, when one exists
    pub invoice_no: Option<String>,
    /// Container number of the referenced entry, when one exists
    pub container_no: Option<String>,
}

impl From<LogWithContext> for LogResponse {
    fn from(row: LogWithContext) -> Self {
        Self {
            id: row.id,
            action: row.action,
            description: row.description,
            created_at: row.created_at,
            user_name: row.user_name,
            user_email: row.user_email,
            invoice_no: row.invoice_no,
            container_no: row.container_no,
        }
    }
}
