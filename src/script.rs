use anyhow::{anyhow, Result};
use log::warn;
use serde::Deserialize;

use crate::bank::Bank;
use crate::error::Result as BankResult;
use crate::types::{Amount, BranchId, CustomerId, TellerId};

/// The different operation identifiers as in the script CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawOperationType {
    Branch,
    Teller,
    Open,
    Deposit,
    Withdraw,
    Provide,
    Collect,
}

/// A single row of the script CSV, which columns are needed depends on the type
#[derive(Debug, Deserialize)]
pub struct RawOperation {
    #[serde(rename = "type")]
    operation_type: RawOperationType,

    #[serde(rename = "branch")]
    branch: Option<BranchId>,

    #[serde(rename = "id")]
    id: Option<u32>,

    #[serde(rename = "amount")]
    amount: Option<Amount>,

    #[serde(rename = "name")]
    name: Option<String>,
}

/// One step of a driver script
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    AddBranch { address: String, funds: Amount },
    AddTeller { branch: BranchId, teller: TellerId },
    OpenAccount { branch: BranchId, name: String },
    Deposit { branch: BranchId, customer: CustomerId, amount: Amount },
    Withdraw { branch: BranchId, customer: CustomerId, amount: Amount },
    ProvideCash { branch: BranchId, amount: Amount },
    CollectCash { ratio: Amount },
}

fn required<T>(value: Option<T>, column: &str, operation: RawOperationType) -> Result<T> {
    value.ok_or_else(|| anyhow!("No '{}' for {:?} operation", column, operation))
}

/// Turn a `RawOperation` into an `Operation`, columns not needed by the type are ignored
fn raw_to_operation(raw: RawOperation) -> Result<Operation> {
    let RawOperation {
        operation_type,
        branch,
        id,
        amount,
        name,
    } = raw;

    let operation = match operation_type {
        RawOperationType::Branch => Operation::AddBranch {
            address: required(name, "name", operation_type)?,
            funds: amount.unwrap_or(Amount::ZERO),
        },
        RawOperationType::Teller => Operation::AddTeller {
            branch: required(branch, "branch", operation_type)?,
            teller: required(id, "id", operation_type)?,
        },
        RawOperationType::Open => Operation::OpenAccount {
            branch: required(branch, "branch", operation_type)?,
            name: required(name, "name", operation_type)?,
        },
        RawOperationType::Deposit => Operation::Deposit {
            branch: required(branch, "branch", operation_type)?,
            customer: required(id, "id", operation_type)?,
            amount: required(amount, "amount", operation_type)?,
        },
        RawOperationType::Withdraw => Operation::Withdraw {
            branch: required(branch, "branch", operation_type)?,
            customer: required(id, "id", operation_type)?,
            amount: required(amount, "amount", operation_type)?,
        },
        RawOperationType::Provide => Operation::ProvideCash {
            branch: required(branch, "branch", operation_type)?,
            amount: required(amount, "amount", operation_type)?,
        },
        RawOperationType::Collect => Operation::CollectCash {
            ratio: required(amount, "amount", operation_type)?,
        },
    };
    Ok(operation)
}

/// For each line of the input (skipping the header), read a line by line `Operation` record.
pub fn iter_operations(reader: impl std::io::Read) -> impl Iterator<Item = Result<Operation>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
        .map(|raw| raw.map_err(Into::into).and_then(raw_to_operation))
}

/// Apply a single operation to the bank
pub fn apply_operation(bank: &mut Bank, operation: Operation) -> BankResult<()> {
    match operation {
        Operation::AddBranch { address, funds } => {
            bank.add_branch(&address, funds)?;
        }
        Operation::AddTeller { branch, teller } => {
            bank.at(branch)?.add_teller(teller);
        }
        Operation::OpenAccount { branch, name } => {
            bank.at(branch)?.open_account(&name)?;
        }
        Operation::Deposit {
            branch,
            customer,
            amount,
        } => bank.at(branch)?.deposit(customer, amount)?,
        Operation::Withdraw {
            branch,
            customer,
            amount,
        } => bank.at(branch)?.withdraw(customer, amount)?,
        Operation::ProvideCash { branch, amount } => bank.provide_cash(branch, amount)?,
        Operation::CollectCash { ratio } => {
            bank.collect_cash(ratio)?;
        }
    }
    Ok(())
}

/// Apply all given operations in order, returning how many were rejected
/// This method is infallible, broken rows and rejected operations are logged and skipped.
pub fn run_script(bank: &mut Bank, operations: impl Iterator<Item = Result<Operation>>) -> usize {
    let mut rejected = 0;
    for (row, operation) in operations.enumerate() {
        let result =
            operation.and_then(|operation| apply_operation(bank, operation).map_err(Into::into));
        if let Err(err) = result {
            warn!("Skipping operation (row = {}): {}", row + 1, err);
            rejected += 1;
        }
    }
    rejected
}
