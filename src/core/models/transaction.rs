use super::{party::Party, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A shared expense split between the two parties. Stays pending until
/// the other party confirms it.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Expense {
    pub id: String,
    /// `YYYY-MM-DD` for new records. Older documents may hold whatever the
    /// client typed; it is kept verbatim.
    #[schema(example = "2024-06-01")]
    pub date: String,
    #[serde(default)]
    pub particular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub total: f64,
    #[serde(rename = "meyanPay")]
    pub meyan_pay: f64,
    #[serde(rename = "kushalPay")]
    pub kushal_pay: f64,
    pub submitted_by: Party,
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_by: Option<Party>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_option"
    )]
    #[schema(value_type = Option<String>, example = "2024-06-01T12:34:56Z")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn paid_by(&self, party: Party) -> f64 {
        match party {
            Party::Meyan => self.meyan_pay,
            Party::Kushal => self.kushal_pay,
        }
    }

    /// Each party's fair share of the expense.
    pub fn fair_share(&self) -> f64 {
        self.total / 2.0
    }
}

/// A direct repayment of outstanding debt. Recorded already confirmed by
/// the recipient.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DebtPayment {
    pub id: String,
    #[schema(example = "2024-06-01")]
    pub date: String,
    pub particular: String,
    pub amount: f64,
    pub is_debt_payment: bool,
    pub paid_by: Party,
    pub paid_to: Party,
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    pub confirmed_by: Party,
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub confirmed_at: DateTime<Utc>,
}

// Debt payments are tried first: an expense never carries `amount`/`paid_by`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum Transaction {
    DebtPayment(DebtPayment),
    Expense(Expense),
}

impl From<Expense> for Transaction {
    fn from(expense: Expense) -> Self {
        Transaction::Expense(expense)
    }
}

impl From<DebtPayment> for Transaction {
    fn from(payment: DebtPayment) -> Self {
        Transaction::DebtPayment(payment)
    }
}
