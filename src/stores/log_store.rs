use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use crate::errors::InternalError;
use crate::types::db::{log_entry, logistic_entry, user};
use crate::types::internal::audit::LogAction;

/// Audit log row joined with the actor and, when present, the entry it
/// references
#[derive(FromQueryResult, Debug)]
pub struct LogWithContext {
    pub id: i64,
    pub action: String,
    pub description: String,
    pub created_at: String,
    pub user_name: String,
    pub user_email: String,
    pub invoice_no: Option<String>,
    pub container_no: Option<String>,
}

/// LogStore appends to and reads the audit log table
///
/// Rows are append-only; nothing in this store updates or deletes them.
pub struct LogStore {
    db: DatabaseConnection,
}

impl LogStore {
    /// Create a new LogStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one audit log row
    pub async fn insert(
        &self,
        actor_id: &str,
        entry_id: Option<i64>,
        action: LogAction,
        description: &str,
    ) -> Result<(), InternalError> {
        let row = log_entry::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(actor_id.to_string()),
            entry_id: Set(entry_id),
            action: Set(action.as_str().to_string()),
            description: Set(description.to_string()),
            created_at: Set(Utc::now().to_rfc3339()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_log", e))?;

        Ok(())
    }

    /// List all log rows with actor identity and entry references, newest
    /// first
    pub async fn list_with_context(&self) -> Result<Vec<LogWithContext>, InternalError> {
        log_entry::Entity::find()
            .select_only()
            .column(log_entry::Column::Id)
            .column(log_entry::Column::Action)
            .column(log_entry::Column::Description)
            .column(log_entry::Column::CreatedAt)
            .column_as(user::Column::Name, "user_name")
            .column_as(user::Column::Email, "user_email")
            .column_as(logistic_entry::Column::InvoiceNo, "invoice_no")
            .column_as(logistic_entry::Column::ContainerNo, "container_no")
            .join(JoinType::InnerJoin, log_entry::Relation::User.def())
            .join(JoinType::LeftJoin, log_entry::Relation::Entry.def())
            .order_by_desc(log_entry::Column::CreatedAt)
            .into_model::<LogWithContext>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_logs", e))
    }
}
