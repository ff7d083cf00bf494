use rust_decimal::Decimal;
use std::fmt;

pub type CustomerId = u32;

pub type TellerId = u32;

pub type BranchId = usize;

pub type Amount = Decimal;

/// A bank employee acting on behalf of a branch, nothing more than an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teller {
    pub id: TellerId,
}

impl Teller {
    pub fn new(id: TellerId) -> Self {
        Self { id }
    }
}

/// The parties every ledger entry refers to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartiesRecord {
    pub customer: CustomerId,
    pub teller: TellerId,
}

/// Represents money flowing towards or from a customer account
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonetaryTransactionRecord {
    pub customer: CustomerId,
    pub teller: TellerId,
    pub amount: Amount,
}

/// A single entry of the ledger, immutable once created
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    OpenAccount(PartiesRecord),
    Deposit(MonetaryTransactionRecord),
    Withdrawal(MonetaryTransactionRecord),
}

impl Transaction {
    pub fn customer(&self) -> CustomerId {
        match self {
            Transaction::OpenAccount(record) => record.customer,
            Transaction::Deposit(record) | Transaction::Withdrawal(record) => record.customer,
        }
    }

    pub fn teller(&self) -> TellerId {
        match self {
            Transaction::OpenAccount(record) => record.teller,
            Transaction::Deposit(record) | Transaction::Withdrawal(record) => record.teller,
        }
    }

    /// The moved amount, opening an account moves no money
    pub fn amount(&self) -> Option<Amount> {
        match self {
            Transaction::OpenAccount(_) => None,
            Transaction::Deposit(record) | Transaction::Withdrawal(record) => Some(record.amount),
        }
    }

    /// Human readable line as it appears in the transaction report
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::OpenAccount(record) => write!(
                f,
                "Teller {} opened account {}",
                record.teller, record.customer
            ),
            Transaction::Deposit(record) => write!(
                f,
                "Teller {} deposited {} to account {}",
                record.teller, record.amount, record.customer
            ),
            Transaction::Withdrawal(record) => write!(
                f,
                "Teller {} withdrew {} from account {}",
                record.teller, record.amount, record.customer
            ),
        }
    }
}

/// The current funds of a customer
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    customer: CustomerId,
    name: String,
    balance: Amount,
}

impl Account {
    /// A fresh account always starts out empty
    pub fn new(customer: CustomerId, name: impl Into<String>) -> Self {
        Self {
            customer,
            name: name.into(),
            balance: Amount::ZERO,
        }
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub(crate) fn deposit(&mut self, amount: Amount) {
        self.balance += amount;
    }

    /// Sufficiency of the balance has to be checked by the caller
    pub(crate) fn withdraw(&mut self, amount: Amount) {
        debug_assert!(amount <= self.balance);
        self.balance -= amount;
    }
}
