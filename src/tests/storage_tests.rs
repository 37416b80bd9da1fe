use crate::api::handlers::AppService;
use crate::core::errors::LedgerError;
use crate::core::models::{
    balances::Balances, draft::ExpenseDraft, ledger::LedgerState, party::Party, transaction::Transaction,
};
use crate::core::services::LedgerService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, json_file::JsonFileStorage};
use crate::tests::{confirmed_expense, debt_payment};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

fn file_service(path: &Path) -> AppService {
    let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(path));
    LedgerService::new(storage, InMemoryLogging::new())
}

fn sample_state() -> LedgerState {
    LedgerState {
        transactions: vec![confirmed_expense(100.0, 70.0, 30.0), debt_payment(Party::Kushal, 5.0)],
        pending_transactions: Vec::new(),
        balances: Balances::owed(Party::Kushal, 15.0),
    }
}

#[tokio::test]
async fn missing_file_loads_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStorage::new(dir.path().join("ledger.json"));
    assert_eq!(store.load().await.unwrap(), LedgerState::new());
}

#[tokio::test]
async fn init_creates_empty_document_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let store = JsonFileStorage::new(&path);

    store.init().await.unwrap();
    let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({ "transactions": [], "pending_transactions": [], "balances": { "meyan": 0.0, "kushal": 0.0 } })
    );

    let state = sample_state();
    store.save(&state).await.unwrap();
    store.init().await.unwrap();
    assert_eq!(store.load().await.unwrap(), state);
}

#[tokio::test]
async fn saved_state_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStorage::new(dir.path().join("ledger.json"));
    let state = sample_state();

    store.save(&state).await.unwrap();
    let reloaded = JsonFileStorage::new(store.path()).load().await.unwrap();
    assert_eq!(reloaded, state);
    assert!(matches!(reloaded.transactions[0], Transaction::Expense(_)));
    assert!(matches!(reloaded.transactions[1], Transaction::DebtPayment(_)));
}

#[tokio::test]
async fn corrupt_file_loads_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStorage::new(&path);
    assert_eq!(store.load().await.unwrap(), LedgerState::new());
}

#[tokio::test]
async fn reads_documents_in_the_existing_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let document = json!({
        "transactions": [
            {
                "id": "a1",
                "date": "2024-06-01",
                "particular": "Rent",
                "total": 100.0,
                "meyanPay": 70.0,
                "kushalPay": 30.0,
                "submitted_by": "meyan",
                "created_at": "2024-06-01T10:00:00Z",
                "confirmed_by": "kushal",
                "confirmed_at": "2024-06-01T11:00:00Z"
            },
            {
                "id": "b2",
                "date": "2024-06-02",
                "particular": "Debt payment from kushal to meyan",
                "amount": 20.0,
                "is_debt_payment": true,
                "paid_by": "kushal",
                "paid_to": "meyan",
                "created_at": "2024-06-02T10:00:00Z",
                "confirmed_by": "meyan",
                "confirmed_at": "2024-06-02T10:00:00Z"
            }
        ],
        "pending_transactions": [],
        "balances": { "meyan": 0.0, "kushal": 20.0 }
    });
    std::fs::write(&path, document.to_string()).unwrap();

    let state = JsonFileStorage::new(&path).load().await.unwrap();
    assert_eq!(state.transactions.len(), 2);
    let Transaction::Expense(expense) = &state.transactions[0] else {
        panic!("expected an expense");
    };
    assert_eq!(expense.meyan_pay, 70.0);
    assert_eq!(expense.confirmed_by, Some(Party::Kushal));
    let Transaction::DebtPayment(payment) = &state.transactions[1] else {
        panic!("expected a debt payment");
    };
    assert_eq!(payment.paid_to, Party::Meyan);
    assert_eq!(state.balances, Balances::owed(Party::Kushal, 20.0));
}

#[tokio::test]
async fn naive_timestamps_from_older_documents_are_read_as_utc() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let document = json!({
        "transactions": [],
        "pending_transactions": [{
            "id": "c3",
            "date": "2024-06-03",
            "particular": "Cab",
            "total": 12.0,
            "meyanPay": 12.0,
            "kushalPay": 0.0,
            "submitted_by": "meyan",
            "created_at": "2024-06-03T08:15:30.123456"
        }],
        "balances": { "meyan": 0.0, "kushal": 0.0 }
    });
    std::fs::write(&path, document.to_string()).unwrap();

    let state = JsonFileStorage::new(&path).load().await.unwrap();
    assert_eq!(state.pending_transactions.len(), 1);
    assert_eq!(state.pending_transactions[0].created_at.to_rfc3339(), "2024-06-03T08:15:30.123456+00:00");
    assert!(state.pending_transactions[0].confirmed_at.is_none());
}

#[tokio::test]
async fn free_text_dates_from_older_documents_survive_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let document = json!({
        "transactions": [{
            "id": "d4",
            "date": "June 1",
            "particular": "Rent",
            "total": 100.0,
            "meyanPay": 70.0,
            "kushalPay": 30.0,
            "submitted_by": "meyan",
            "created_at": "2024-06-01T10:00:00",
            "confirmed_by": "kushal",
            "confirmed_at": "2024-06-01T11:00:00"
        }],
        "pending_transactions": [],
        "balances": { "meyan": 0.0, "kushal": 0.0 }
    });
    std::fs::write(&path, document.to_string()).unwrap();

    let snapshot = file_service(&path).list_transactions().await.unwrap();
    assert_eq!(snapshot.confirmed.len(), 1);
    assert_eq!(snapshot.balances, Balances::owed(Party::Kushal, 20.0));

    let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["transactions"][0]["date"], "June 1");
    assert_eq!(on_disk["balances"]["kushal"], json!(20.0));
}

#[tokio::test]
async fn mismatched_document_is_an_error_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let document = json!({
        "transactions": [{
            "id": "e5",
            "date": "2024-06-01",
            "particular": "Rent",
            "total": 100.0,
            "meyanPay": 70.0,
            "kushalPay": 30.0,
            "submitted_by": "someone-else",
            "created_at": "2024-06-01T10:00:00Z"
        }],
        "pending_transactions": [],
        "balances": { "meyan": 0.0, "kushal": 0.0 }
    })
    .to_string();
    std::fs::write(&path, &document).unwrap();

    let service = file_service(&path);
    assert!(matches!(service.list_transactions().await, Err(LedgerError::StorageError(_))));
    let submitted = service
        .submit_transaction(Party::Meyan, ExpenseDraft::new(10.0, 10.0, 0.0))
        .await;
    assert!(matches!(submitted, Err(LedgerError::StorageError(_))));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), document);
}

#[tokio::test]
async fn pending_expense_omits_confirmation_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStorage::new(dir.path().join("ledger.json"));
    let Transaction::Expense(mut expense) = confirmed_expense(10.0, 10.0, 0.0) else {
        unreachable!()
    };
    expense.confirmed_by = None;
    expense.confirmed_at = None;
    let state = LedgerState {
        pending_transactions: vec![expense],
        ..LedgerState::new()
    };

    store.save(&state).await.unwrap();
    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let pending = &raw["pending_transactions"][0];
    assert!(pending.get("confirmed_by").is_none());
    assert!(pending.get("confirmed_at").is_none());
    assert_eq!(pending["meyanPay"], json!(10.0));
}

#[tokio::test]
async fn in_memory_store_returns_copies() {
    let store = InMemoryStorage::with_state(sample_state());
    let mut loaded = store.load().await.unwrap();
    loaded.transactions.clear();
    assert_eq!(store.load().await.unwrap().transactions.len(), 2);
}
