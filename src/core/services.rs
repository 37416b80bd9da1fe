use crate::core::balance::{calculate_balances, round2};
use crate::core::constants::{DEBT_PAID, TRANSACTION_CONFIRMED, TRANSACTION_SUBMITTED};
use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::{
    audit::AppLog,
    balances::Balances,
    draft::{AmountInput, ExpenseDraft},
    party::Party,
    transaction::{DebtPayment, Expense, Transaction},
};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub confirmed: Vec<Transaction>,
    pub pending: Vec<Expense>,
    pub balances: Balances,
}

/// Result of a debt payment request.
#[derive(Debug, Clone, PartialEq)]
pub enum DebtPaymentOutcome {
    /// The caller owed nothing; the ledger was left untouched.
    NothingOwed { balances: Balances },
    Paid { payment: DebtPayment, balances: Balances },
}

impl DebtPaymentOutcome {
    pub fn balances(&self) -> Balances {
        match self {
            DebtPaymentOutcome::NothingOwed { balances } => *balances,
            DebtPaymentOutcome::Paid { balances, .. } => *balances,
        }
    }
}

pub struct LedgerService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> LedgerService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        LedgerService { storage, logging }
    }

    async fn record(&self, action: &str, details: serde_json::Value, party: Party) -> Result<(), LedgerError> {
        self.logging.log_action(action, details, party).await
    }

    /// Normalizes a submitted date to `YYYY-MM-DD`, defaulting to today.
    fn parse_date(&self, date: Option<&str>) -> Result<String, LedgerError> {
        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            None => Local::now().date_naive(),
            Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                LedgerError::InvalidInput(
                    "date".to_string(),
                    FieldError {
                        field: "date".to_string(),
                        title: "Invalid date".to_string(),
                        description: format!("{} is not a YYYY-MM-DD date", d),
                    },
                )
            })?,
        };
        Ok(date.format("%Y-%m-%d").to_string())
    }

    /// A payment value: finite and not negative. Missing shares count as zero.
    fn payment_value(input: Option<&AmountInput>, required: bool) -> Result<f64, LedgerError> {
        let value = match input {
            Some(input) => input.value().ok_or(LedgerError::InvalidPaymentValues)?,
            None if required => return Err(LedgerError::InvalidPaymentValues),
            None => 0.0,
        };
        if value < 0.0 {
            return Err(LedgerError::InvalidPaymentValues);
        }
        Ok(value)
    }

    /// Recomputes balances from the confirmed history and stores the fresh
    /// snapshot back into the document.
    pub async fn list_transactions(&self) -> Result<LedgerSnapshot, LedgerError> {
        let mut state = self.storage.load().await?;
        state.balances = calculate_balances(&state.transactions);
        self.storage.save(&state).await?;
        debug!(
            "Listed {} confirmed and {} pending transactions",
            state.transactions.len(),
            state.pending_transactions.len()
        );
        Ok(LedgerSnapshot {
            confirmed: state.transactions,
            pending: state.pending_transactions,
            balances: state.balances,
        })
    }

    pub async fn submit_transaction(&self, submitted_by: Party, draft: ExpenseDraft) -> Result<Expense, LedgerError> {
        let total = Self::payment_value(draft.total.as_ref(), true)?;
        let meyan_pay = Self::payment_value(draft.meyan_pay.as_ref(), false)?;
        let kushal_pay = Self::payment_value(draft.kushal_pay.as_ref(), false)?;

        if round2(meyan_pay + kushal_pay) != round2(total) {
            warn!(
                "Rejected split from {}: {} + {} != {}",
                submitted_by, meyan_pay, kushal_pay, total
            );
            return Err(LedgerError::SplitMismatch);
        }

        let date = self.parse_date(draft.date.as_deref())?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            date,
            particular: draft.particular.unwrap_or_default(),
            remarks: draft.remarks.filter(|r| !r.trim().is_empty()),
            total,
            meyan_pay,
            kushal_pay,
            submitted_by,
            created_at: Utc::now(),
            confirmed_by: None,
            confirmed_at: None,
        };

        let mut state = self.storage.load().await?;
        state.pending_transactions.push(expense.clone());
        self.storage.save(&state).await?;
        info!("Transaction {} submitted by {}", expense.id, submitted_by);

        self.record(
            TRANSACTION_SUBMITTED,
            json!({
                "transaction_id": expense.id,
                "particular": expense.particular,
                "total": expense.total,
                "meyanPay": expense.meyan_pay,
                "kushalPay": expense.kushal_pay
            }),
            submitted_by,
        )
        .await?;

        Ok(expense)
    }

    /// Moves a pending expense into the confirmed history. Only the party
    /// that did not submit it may confirm it.
    pub async fn confirm_transaction(&self, transaction_id: &str, confirmed_by: Party) -> Result<Expense, LedgerError> {
        let mut state = self.storage.load().await?;

        let pending = state
            .find_pending(transaction_id)
            .ok_or_else(|| LedgerError::TransactionNotFound(transaction_id.to_string()))?;
        if pending.submitted_by == confirmed_by {
            warn!("{} attempted to confirm own transaction {}", confirmed_by, transaction_id);
            return Err(LedgerError::SelfConfirmation);
        }

        let mut expense = state
            .take_pending(transaction_id)
            .ok_or_else(|| LedgerError::TransactionNotFound(transaction_id.to_string()))?;
        expense.confirmed_by = Some(confirmed_by);
        expense.confirmed_at = Some(Utc::now());

        state.transactions.push(expense.clone().into());
        state.balances = calculate_balances(&state.transactions);
        self.storage.save(&state).await?;
        info!("Transaction {} confirmed by {}", transaction_id, confirmed_by);

        self.record(
            TRANSACTION_CONFIRMED,
            json!({
                "transaction_id": transaction_id,
                "submitted_by": expense.submitted_by,
                "balances": state.balances
            }),
            confirmed_by,
        )
        .await?;

        Ok(expense)
    }

    /// Pays down the caller's debt, capped to what is actually owed.
    pub async fn pay_debt(&self, payer: Party, amount: Option<AmountInput>) -> Result<DebtPaymentOutcome, LedgerError> {
        let requested = amount
            .as_ref()
            .and_then(AmountInput::value)
            .filter(|a| *a > 0.0)
            .ok_or(LedgerError::InvalidAmount)?;

        let mut state = self.storage.load().await?;
        let balances = calculate_balances(&state.transactions);
        if balances.debtor() != Some(payer) {
            debug!("{} has no debt to pay", payer);
            return Ok(DebtPaymentOutcome::NothingOwed { balances });
        }

        let owed = balances.owed_by(payer);
        let amount = round2(requested.min(owed));
        let recipient = payer.other();
        let now = Utc::now();
        let payment = DebtPayment {
            id: Uuid::new_v4().to_string(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            particular: format!("Debt payment from {} to {}", payer, recipient),
            amount,
            is_debt_payment: true,
            paid_by: payer,
            paid_to: recipient,
            created_at: now,
            confirmed_by: recipient,
            confirmed_at: now,
        };

        state.transactions.push(payment.clone().into());
        state.balances = calculate_balances(&state.transactions);
        self.storage.save(&state).await?;
        info!("{} paid {:.2} to {} (requested {:.2})", payer, amount, recipient, requested);
        if state.balances.is_settled() {
            info!("Debt between {} and {} is settled", payer, recipient);
        }

        self.record(
            DEBT_PAID,
            json!({
                "transaction_id": payment.id,
                "requested": requested,
                "amount": amount,
                "paid_to": recipient,
                "balances": state.balances
            }),
            payer,
        )
        .await?;

        Ok(DebtPaymentOutcome::Paid {
            payment,
            balances: state.balances,
        })
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, LedgerError> {
        self.logging.get_logs().await
    }
}
