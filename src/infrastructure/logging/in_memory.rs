use crate::core::errors::LedgerError;
use crate::core::models::{audit::AppLog, party::Party};
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-local activity log. Entries are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(&self, action: &str, details: Value, party: Party) -> Result<(), LedgerError> {
        let Value::Object(details) = details else {
            return Err(LedgerError::LoggingError(format!(
                "Details for {} must be a JSON object",
                action
            )));
        };
        let entry = AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            user_id: party,
            details: details.into_iter().collect(),
            timestamp: chrono::Utc::now(),
        };
        debug!("Activity {} by {}", entry.action, entry.user_id);
        self.logs.write().await.push(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, LedgerError> {
        Ok(self.logs.read().await.clone())
    }
}
