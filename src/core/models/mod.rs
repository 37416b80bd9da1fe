pub mod audit;
pub mod balances;
pub mod draft;
pub mod ledger;
pub mod party;
pub mod timestamp;
pub mod transaction;
