use super::party::Party;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net debt between the two parties. Each field is what that party owes
/// the other; after netting at most one of them is nonzero.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Balances {
    #[serde(default)]
    pub meyan: f64,
    #[serde(default)]
    pub kushal: f64,
}

impl Balances {
    pub fn settled() -> Self {
        Self::default()
    }

    /// Balances where `debtor` owes `amount` and the counterpart owes nothing.
    pub fn owed(debtor: Party, amount: f64) -> Self {
        let mut balances = Self::settled();
        *balances.slot_mut(debtor) = amount;
        balances
    }

    pub fn owed_by(&self, party: Party) -> f64 {
        match party {
            Party::Meyan => self.meyan,
            Party::Kushal => self.kushal,
        }
    }

    /// The party currently in debt, if any.
    pub fn debtor(&self) -> Option<Party> {
        Party::ALL.into_iter().find(|p| self.owed_by(*p) > 0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.debtor().is_none()
    }

    fn slot_mut(&mut self, party: Party) -> &mut f64 {
        match party {
            Party::Meyan => &mut self.meyan,
            Party::Kushal => &mut self.kushal,
        }
    }
}
