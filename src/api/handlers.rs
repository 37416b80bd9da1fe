use crate::{
    api::models::*,
    core::{
        errors::{FieldError, LedgerError},
        models::{audit::AppLog, draft::ExpenseDraft, party::Party},
        services::{DebtPaymentOutcome, LedgerService, LedgerSnapshot},
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::Storage},
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::header;
use std::sync::Arc;

pub type AppService = LedgerService<InMemoryLogging, Arc<dyn Storage>>;
pub type SharedService = Arc<AppService>;

/// Reads the caller from `Authorization: Bearer <name>`. The name is
/// trusted as-is; it only has to be one of the two parties.
pub fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, LedgerError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();
    let name = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if name.is_empty() {
        return Err(LedgerError::MissingIdentity);
    }
    Ok(Caller(name.parse::<Party>()?))
}

async fn identity_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let caller = caller_from_headers(req.headers())?;
    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError(LedgerError::InvalidInput(
        "body".to_string(),
        FieldError {
            field: "body".to_string(),
            title: "Invalid body".to_string(),
            description: rejection.body_text(),
        },
    ))
}

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    let protected_routes = Router::new()
        .route("/transactions", get(list_transactions).post(submit_transaction))
        .route("/transactions/{transaction_id}/confirm", post(confirm_transaction))
        .route("/pay_debt", post(pay_debt))
        .route("/logs", get(get_app_logs))
        .route_layer(middleware::from_fn(identity_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .merge(protected_routes)
        .with_state(service)
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Confirmed and pending transactions with fresh balances", body = LedgerSnapshot),
        (status = 401, description = "Missing identity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_transactions(State(service): State<SharedService>) -> Result<Json<LedgerSnapshot>, ApiError> {
    let snapshot = service.list_transactions().await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = ExpenseDraft,
    responses(
        (status = 201, description = "Transaction submitted for confirmation", body = SubmitTransactionResponse),
        (status = 400, description = "Invalid payment values or split", body = ErrorResponse),
        (status = 401, description = "Missing identity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn submit_transaction(
    State(service): State<SharedService>,
    Extension(Caller(party)): Extension<Caller>,
    body: Result<Json<ExpenseDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitTransactionResponse>), ApiError> {
    let Json(draft) = body.map_err(body_error)?;
    let expense = service.submit_transaction(party, draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitTransactionResponse {
            message: "Transaction submitted".to_string(),
            transaction_id: expense.id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/confirm",
    params(
        ("transaction_id" = String, Path, description = "ID of the pending transaction")
    ),
    responses(
        (status = 200, description = "Transaction confirmed", body = MessageResponse),
        (status = 400, description = "Cannot confirm your own transaction", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn confirm_transaction(
    State(service): State<SharedService>,
    Extension(Caller(party)): Extension<Caller>,
    Path(transaction_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.confirm_transaction(&transaction_id, party).await?;
    Ok(Json(MessageResponse {
        message: "Transaction confirmed".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/pay_debt",
    request_body = PayDebtRequest,
    responses(
        (status = 201, description = "Debt payment recorded", body = PayDebtResponse),
        (status = 200, description = "No debt to pay", body = PayDebtResponse),
        (status = 400, description = "Invalid amount", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn pay_debt(
    State(service): State<SharedService>,
    Extension(Caller(party)): Extension<Caller>,
    body: Result<Json<PayDebtRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PayDebtResponse>), ApiError> {
    // An unreadable body is an invalid amount, same as a missing one.
    let amount = body.ok().and_then(|Json(req)| req.amount);
    let outcome = service.pay_debt(party, amount).await?;
    let new_balances = outcome.balances();
    let response = match outcome {
        DebtPaymentOutcome::NothingOwed { .. } => (
            StatusCode::OK,
            Json(PayDebtResponse {
                message: "No debt to pay".to_string(),
                new_balances,
            }),
        ),
        DebtPaymentOutcome::Paid { payment, .. } => (
            StatusCode::CREATED,
            Json(PayDebtResponse {
                message: format!("{} paid {:.2} to {}", payment.paid_by, payment.amount, payment.paid_to),
                new_balances,
            }),
        ),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Activity log", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_app_logs(State(service): State<SharedService>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(super::openapi::ApiDoc::openapi())
}
