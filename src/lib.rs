pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::LedgerError;
pub use crate::core::services::LedgerService;
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::{in_memory::InMemoryStorage, json_file::JsonFileStorage};

#[cfg(test)]
mod tests;
