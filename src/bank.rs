use anyhow::Result as AnyResult;
use log::{debug, info};

use crate::bank_system::BankSystem;
use crate::branch::{check_ratio, BankBranch};
use crate::error::{BankError, Result};
use crate::report::write_transactions;
use crate::teller::TellerSelection;
use crate::types::{Amount, BranchId, CustomerId, Teller, TellerId};

/// The bank as a whole: its branches, the cash collected from them, and the one shared system
#[derive(Debug, Default)]
pub struct Bank {
    branches: Vec<BankBranch>,
    total_cash: Amount,
    system: BankSystem,
    selection: TellerSelection,
}

/// One branch together with the shared bank system, for running customer operations
pub struct BranchDesk<'a> {
    branch: &'a mut BankBranch,
    system: &'a mut BankSystem,
}

impl<'a> BranchDesk<'a> {
    pub fn add_teller(&mut self, id: TellerId) -> &mut Self {
        self.branch.add_teller(Teller::new(id));
        self
    }

    pub fn open_account(&mut self, name: &str) -> Result<CustomerId> {
        self.branch.open_account(self.system, name)
    }

    pub fn deposit(&mut self, customer: CustomerId, amount: Amount) -> Result<()> {
        self.branch.deposit(self.system, customer, amount)
    }

    pub fn withdraw(&mut self, customer: CustomerId, amount: Amount) -> Result<()> {
        self.branch.withdraw(self.system, customer, amount)
    }

    pub fn branch(&self) -> &BankBranch {
        self.branch
    }
}

impl Bank {
    pub fn new() -> Self {
        Self::with_selection(TellerSelection::Random)
    }

    pub fn with_selection(selection: TellerSelection) -> Self {
        Self {
            branches: Vec::new(),
            total_cash: Amount::ZERO,
            system: BankSystem::new(),
            selection,
        }
    }

    /// Register a branch, its vault may start empty but never in debt
    pub fn add_branch(&mut self, address: &str, initial_funds: Amount) -> Result<BranchId> {
        if initial_funds < Amount::ZERO {
            return Err(BankError::InvalidAmount(initial_funds));
        }
        let id = self.branches.len();
        let selector = self.selection.selector_for(id);
        self.branches
            .push(BankBranch::new(address, initial_funds, selector));

        debug!(
            "Added branch (branch = {}, address = {}, funds = {})",
            id, address, initial_funds
        );
        Ok(id)
    }

    pub fn branch(&self, id: BranchId) -> Result<&BankBranch> {
        self.branches.get(id).ok_or(BankError::BranchNotFound(id))
    }

    pub fn branch_mut(&mut self, id: BranchId) -> Result<&mut BankBranch> {
        self.branches
            .get_mut(id)
            .ok_or(BankError::BranchNotFound(id))
    }

    pub fn branches(&self) -> &[BankBranch] {
        &self.branches
    }

    /// Borrow a branch and the shared system at once
    pub fn at(&mut self, id: BranchId) -> Result<BranchDesk<'_>> {
        let branch = self
            .branches
            .get_mut(id)
            .ok_or(BankError::BranchNotFound(id))?;
        Ok(BranchDesk {
            branch,
            system: &mut self.system,
        })
    }

    /// Collect the given share of cash from every branch into the bank's total
    pub fn collect_cash(&mut self, ratio: Amount) -> Result<Amount> {
        check_ratio(ratio)?;

        let mut collected = Amount::ZERO;
        for branch in &mut self.branches {
            collected += branch.collect_cash(ratio)?;
        }
        self.total_cash += collected;

        info!(
            "Collected {} from {} branches (total = {})",
            collected,
            self.branches.len(),
            self.total_cash
        );
        Ok(collected)
    }

    /// Move cash from the bank's total into one branch
    pub fn provide_cash(&mut self, id: BranchId, amount: Amount) -> Result<()> {
        let branch = self
            .branches
            .get_mut(id)
            .ok_or(BankError::BranchNotFound(id))?;
        if amount > self.total_cash {
            return Err(BankError::InsufficientBankCash {
                available: self.total_cash,
                requested: amount,
            });
        }
        branch.provide_cash(amount)?;
        self.total_cash -= amount;
        Ok(())
    }

    pub fn total_cash(&self) -> Amount {
        self.total_cash
    }

    pub fn system(&self) -> &BankSystem {
        &self.system
    }

    /// Write every transaction description in log order, one per line
    pub fn write_transactions(&self, destination: &mut dyn std::io::Write) -> AnyResult<()> {
        write_transactions(destination, self.system.get_transactions().iter())
    }

    pub fn print_transactions(&self) -> AnyResult<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_transactions(&mut handle)
    }
}
