use thiserror::Error;

use crate::types::{Amount, BranchId, CustomerId};

/// Everything a bank operation can reject, nothing is retried internally
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    #[error("Account does not exist (customer = {0})")]
    NotFound(CustomerId),

    #[error("Insufficient funds (customer = {customer}, balance = {balance}, requested = {requested})")]
    InsufficientFunds {
        customer: CustomerId,
        balance: Amount,
        requested: Amount,
    },

    #[error("Insufficient cash at branch (available = {available}, requested = {requested})")]
    InsufficientBranchCash { available: Amount, requested: Amount },

    #[error("Branch has no tellers")]
    NoTellers,

    #[error("Amount must be positive (amount = {0})")]
    InvalidAmount(Amount),

    #[error("Ratio must be between 0 and 1 (ratio = {0})")]
    InvalidRatio(Amount),

    #[error("Branch does not exist (branch = {0})")]
    BranchNotFound(BranchId),

    #[error("Insufficient cash at bank (available = {available}, requested = {requested})")]
    InsufficientBankCash { available: Amount, requested: Amount },
}

pub type Result<T> = std::result::Result<T, BankError>;
