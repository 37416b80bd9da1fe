mod storage_tests;

use crate::api::handlers::AppService;
use crate::core::models::{
    party::Party,
    transaction::{DebtPayment, Expense, Transaction},
};
use crate::core::services::LedgerService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use chrono::Utc;
use std::sync::Arc;

/// A service over in-memory doubles, plus a handle on its storage for
/// inspecting the persisted document.
pub fn create_test_service() -> (AppService, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let shared: Arc<dyn Storage> = Arc::new(storage.clone());
    (LedgerService::new(shared, InMemoryLogging::new()), storage)
}

pub fn confirmed_expense(total: f64, meyan_pay: f64, kushal_pay: f64) -> Transaction {
    Transaction::Expense(Expense {
        id: uuid::Uuid::new_v4().to_string(),
        date: "2024-06-01".to_string(),
        particular: "Groceries".to_string(),
        remarks: None,
        total,
        meyan_pay,
        kushal_pay,
        submitted_by: Party::Meyan,
        created_at: Utc::now(),
        confirmed_by: Some(Party::Kushal),
        confirmed_at: Some(Utc::now()),
    })
}

pub fn debt_payment(paid_by: Party, amount: f64) -> Transaction {
    Transaction::DebtPayment(DebtPayment {
        id: uuid::Uuid::new_v4().to_string(),
        date: "2024-06-02".to_string(),
        particular: format!("Debt payment from {} to {}", paid_by, paid_by.other()),
        amount,
        is_debt_payment: true,
        paid_by,
        paid_to: paid_by.other(),
        created_at: Utc::now(),
        confirmed_by: paid_by.other(),
        confirmed_at: Utc::now(),
    })
}
