pub mod in_memory;

use crate::core::errors::LedgerError;
use crate::core::models::{audit::AppLog, party::Party};
use async_trait::async_trait;

/// Activity log of ledger mutations, kept apart from the ledger document.
#[async_trait]
pub trait LoggingService: Send + Sync {
    /// `details` must be a JSON object.
    async fn log_action(&self, action: &str, details: serde_json::Value, party: Party) -> Result<(), LedgerError>;
    /// Entries oldest first.
    async fn get_logs(&self) -> Result<Vec<AppLog>, LedgerError>;
}
