use crate::core::errors::LedgerError;
use crate::core::models::ledger::LedgerState;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps the ledger document in process memory. Clones share one document.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<LedgerState>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_state(LedgerState::new())
    }

    pub fn with_state(state: LedgerState) -> Self {
        InMemoryStorage {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn load(&self) -> Result<LedgerState, LedgerError> {
        let state = self.state.read().await;
        Ok(state.clone())
    }

    async fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        let mut current = self.state.write().await;
        *current = state.clone();
        Ok(())
    }
}
