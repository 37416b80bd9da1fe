use super::{balances::Balances, transaction::Expense, transaction::Transaction};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The whole persisted ledger document.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LedgerState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub pending_transactions: Vec<Expense>,
    #[serde(default)]
    pub balances: Balances,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the pending expense with `id`.
    pub fn take_pending(&mut self, id: &str) -> Option<Expense> {
        let index = self.pending_transactions.iter().position(|tx| tx.id == id)?;
        Some(self.pending_transactions.remove(index))
    }

    pub fn find_pending(&self, id: &str) -> Option<&Expense> {
        self.pending_transactions.iter().find(|tx| tx.id == id)
    }
}
