use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{ErrorResponse, HealthResponse, MessageResponse, PayDebtRequest, PayDebtResponse, SubmitTransactionResponse},
    core::{
        models::{
            audit::AppLog,
            balances::Balances,
            draft::{AmountInput, ExpenseDraft},
            party::Party,
            transaction::{DebtPayment, Expense, Transaction},
        },
        services::LedgerSnapshot,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_transactions,
        super::handlers::submit_transaction,
        super::handlers::confirm_transaction,
        super::handlers::pay_debt,
        super::handlers::get_app_logs,
        super::handlers::health
    ),
    components(schemas(
        ExpenseDraft,
        AmountInput,
        PayDebtRequest,
        PayDebtResponse,
        SubmitTransactionResponse,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
        Party,
        Balances,
        Expense,
        DebtPayment,
        Transaction,
        LedgerSnapshot,
        AppLog
    )),
    modifiers(&SecurityAddon),
    info(
        title = "Duoledger API",
        description = "Two-party expense ledger: submit, confirm and settle shared expenses",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Registers the `Bearer` scheme the protected paths refer to. The token is
/// the caller's party name.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Party name, `meyan` or `kushal`"))
                    .build(),
            ),
        );
    }
}
