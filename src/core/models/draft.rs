use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A numeric value as clients send it: either a JSON number or a numeric
/// string such as `"12.50"`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// The finite value this input holds, if any.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// An expense as submitted, before validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub particular: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub total: Option<AmountInput>,
    #[serde(default, rename = "meyanPay")]
    pub meyan_pay: Option<AmountInput>,
    #[serde(default, rename = "kushalPay")]
    pub kushal_pay: Option<AmountInput>,
}

#[cfg(test)]
impl ExpenseDraft {
    pub fn new(total: impl Into<AmountInput>, meyan_pay: impl Into<AmountInput>, kushal_pay: impl Into<AmountInput>) -> Self {
        ExpenseDraft {
            total: Some(total.into()),
            meyan_pay: Some(meyan_pay.into()),
            kushal_pay: Some(kushal_pay.into()),
            ..Default::default()
        }
    }

    pub fn with_particular(mut self, particular: &str) -> Self {
        self.particular = Some(particular.to_string());
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
}
