use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    #[error("Missing identity")]
    MissingIdentity,
    #[error("Unknown party {0}")]
    UnknownParty(String),
    #[error("Invalid payment values")]
    InvalidPaymentValues,
    #[error("meyanPay + kushalPay must equal total")]
    SplitMismatch,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Cannot confirm your own transaction")]
    SelfConfirmation,
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
}
