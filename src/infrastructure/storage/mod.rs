use crate::core::errors::LedgerError;
use crate::core::models::ledger::LedgerState;
use async_trait::async_trait;

/// Whole-document persistence for the ledger.
///
/// Callers always load the full document, mutate it and save it back. There
/// is no locking across a load/save pair: two interleaved writers lose one
/// of the updates.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load(&self) -> Result<LedgerState, LedgerError>;
    async fn save(&self, state: &LedgerState) -> Result<(), LedgerError>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for std::sync::Arc<T> {
    async fn load(&self) -> Result<LedgerState, LedgerError> {
        (**self).load().await
    }

    async fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        (**self).save(state).await
    }
}

pub mod in_memory;
pub mod json_file;
