#![forbid(unsafe_code)]

pub mod account_store;
pub mod bank;
pub mod bank_system;
pub mod branch;
pub mod error;
pub mod report;
pub mod script;
pub mod teller;
pub mod transaction_log;
pub mod types;
