use std::sync::Arc;

use crate::stores::LogStore;
use crate::types::internal::audit::LogAction;

/// Fire-and-forget audit logging
///
/// Every successful mutation enqueues exactly one log row. The write runs on
/// a spawned task and is never awaited by the request path: audit durability
/// is traded for response latency, and a write failure is reported to the
/// operational log instead of the caller.
pub struct AuditLogger {
    log_store: Arc<LogStore>,
}

impl AuditLogger {
    /// Create a new AuditLogger backed by the given store
    pub fn new(log_store: Arc<LogStore>) -> Self {
        Self { log_store }
    }

    /// Enqueue an audit log row for a completed mutation
    ///
    /// Returns immediately; the insert happens on a background task.
    pub fn record(
        &self,
        actor_id: &str,
        entry_id: Option<i64>,
        action: LogAction,
        description: impl Into<String>,
    ) {
        let store = Arc::clone(&self.log_store);
        let actor_id = actor_id.to_string();
        let description = description.into();

        tokio::spawn(async move {
            if let Err(e) = store.insert(&actor_id, entry_id, action, &description).await {
                tracing::error!(
                    error = %e,
                    actor_id = %actor_id,
                    action = %action,
                    "failed to write audit log"
                );
            }
        });
    }
}
