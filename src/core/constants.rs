pub const TRANSACTION_SUBMITTED: &str = "TRANSACTION_SUBMITTED";
pub const TRANSACTION_CONFIRMED: &str = "TRANSACTION_CONFIRMED";
pub const DEBT_PAID: &str = "DEBT_PAID";
