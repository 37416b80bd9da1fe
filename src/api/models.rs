use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::{balances::Balances, draft::AmountInput, party::Party};

/// The party a request acts as, taken from the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller(pub Party);

#[derive(Deserialize, Serialize, ToSchema)]
pub struct PayDebtRequest {
    #[serde(default)]
    pub amount: Option<AmountInput>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitTransactionResponse {
    pub message: String,
    pub transaction_id: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PayDebtResponse {
    pub message: String,
    pub new_balances: Balances,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LedgerError::MissingIdentity => StatusCode::UNAUTHORIZED,
            LedgerError::UnknownParty(_) => StatusCode::FORBIDDEN,
            LedgerError::InvalidPaymentValues
            | LedgerError::SplitMismatch
            | LedgerError::InvalidAmount
            | LedgerError::SelfConfirmation
            | LedgerError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            LedgerError::TransactionNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::StorageError(_) | LedgerError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            LedgerError::TransactionNotFound(_) => "Transaction not found".to_string(),
            LedgerError::InvalidInput(_, detail) => detail.description,
            LedgerError::StorageError(msg) | LedgerError::LoggingError(msg) => {
                tracing::error!("Request failed: {}", msg);
                "Server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
