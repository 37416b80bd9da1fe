//! Net balance calculation over the confirmed history.
//!
//! Balances are never updated incrementally: every read and every mutation
//! folds the full confirmed list from zero, so the stored snapshot can never
//! drift from the transactions it was derived from.

use crate::core::models::{
    balances::Balances,
    party::Party,
    transaction::{DebtPayment, Expense, Transaction},
};

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Signed running position of each party in whole cents. Positive means the
/// party is owed money, negative means it owes. The two always sum to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Positions {
    meyan: i64,
    kushal: i64,
}

impl Positions {
    fn get_mut(&mut self, party: Party) -> &mut i64 {
        match party {
            Party::Meyan => &mut self.meyan,
            Party::Kushal => &mut self.kushal,
        }
    }

    /// Moves `cents` from `from`'s position to `to`'s.
    fn shift(&mut self, from: Party, to: Party, cents: i64) {
        *self.get_mut(from) -= cents;
        *self.get_mut(to) += cents;
    }

    /// Meyan's excess over a half share, rounded to a cent once per expense,
    /// moves from kushal's position to meyan's.
    fn apply_expense(&mut self, expense: &Expense) {
        let excess = to_cents(expense.paid_by(Party::Meyan) - expense.fair_share());
        self.shift(Party::Kushal, Party::Meyan, excess);
    }

    /// Money handed over moves the payer's position up towards zero and the
    /// recipient's down by the same amount.
    fn apply_debt_payment(&mut self, payment: &DebtPayment) {
        self.shift(payment.paid_to, payment.paid_by, to_cents(payment.amount));
    }

    /// Collapses both positions into a single owed amount for the debtor.
    fn net(self) -> Balances {
        if self.meyan > 0 {
            Balances::owed(Party::Kushal, self.meyan as f64 / 100.0)
        } else if self.kushal > 0 {
            Balances::owed(Party::Meyan, self.kushal as f64 / 100.0)
        } else {
            Balances::settled()
        }
    }
}

/// Recomputes net balances from an ordered sequence of confirmed transactions.
pub fn calculate_balances<'a, I>(transactions: I) -> Balances
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Positions::default(), |mut positions, tx| {
            match tx {
                Transaction::Expense(expense) => positions.apply_expense(expense),
                Transaction::DebtPayment(payment) => positions.apply_debt_payment(payment),
            }
            positions
        })
        .net()
}
