use log::debug;

use crate::bank_system::BankSystem;
use crate::error::{BankError, Result};
use crate::teller::TellerSelector;
use crate::types::{Amount, CustomerId, Teller, TellerId};

/// A physical location with a cash vault and a roster of tellers
///
/// Customer operations are forwarded to the shared `BankSystem`, each one handled by a teller
/// chosen by the branch's selector.
#[derive(Debug)]
pub struct BankBranch {
    address: String,
    cash_on_hand: Amount,
    tellers: Vec<Teller>,
    selector: Box<dyn TellerSelector>,
}

impl BankBranch {
    pub fn new(
        address: impl Into<String>,
        cash_on_hand: Amount,
        selector: Box<dyn TellerSelector>,
    ) -> Self {
        Self {
            address: address.into(),
            cash_on_hand,
            tellers: Vec::new(),
            selector,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn cash_on_hand(&self) -> Amount {
        self.cash_on_hand
    }

    pub fn tellers(&self) -> &[Teller] {
        &self.tellers
    }

    pub fn add_teller(&mut self, teller: Teller) {
        self.tellers.push(teller);
    }

    pub fn select_teller(&mut self) -> Result<TellerId> {
        if self.tellers.is_empty() {
            return Err(BankError::NoTellers);
        }
        let index = self.selector.pick(self.tellers.len());
        Ok(self.tellers[index].id)
    }

    pub fn open_account(&mut self, system: &mut BankSystem, name: &str) -> Result<CustomerId> {
        let teller = self.select_teller()?;
        Ok(system.open_account(name, teller))
    }

    pub fn deposit(
        &mut self,
        system: &mut BankSystem,
        customer: CustomerId,
        amount: Amount,
    ) -> Result<()> {
        let teller = self.select_teller()?;
        system.deposit(customer, teller, amount)
    }

    /// Pay out cash from the vault to a customer
    ///
    /// The vault shrinks by `amount`, but only once the bank system has accepted the withdrawal.
    pub fn withdraw(
        &mut self,
        system: &mut BankSystem,
        customer: CustomerId,
        amount: Amount,
    ) -> Result<()> {
        if amount > self.cash_on_hand {
            return Err(BankError::InsufficientBranchCash {
                available: self.cash_on_hand,
                requested: amount,
            });
        }
        let teller = self.select_teller()?;

        system.withdraw(customer, teller, amount)?;
        self.cash_on_hand -= amount;
        Ok(())
    }

    /// Take `round(cash_on_hand * ratio)` out of the vault and hand it to the caller
    ///
    /// Rounding never collects more than the vault holds.
    pub fn collect_cash(&mut self, ratio: Amount) -> Result<Amount> {
        check_ratio(ratio)?;

        let collected = (self.cash_on_hand * ratio).round().min(self.cash_on_hand);
        self.cash_on_hand -= collected;

        debug!(
            "Collected {} from branch (address = {})",
            collected, self.address
        );
        Ok(collected)
    }

    pub fn provide_cash(&mut self, amount: Amount) -> Result<()> {
        if amount <= Amount::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }
        self.cash_on_hand += amount;
        Ok(())
    }
}

pub(crate) fn check_ratio(ratio: Amount) -> Result<()> {
    if ratio.is_sign_negative() || ratio > Amount::ONE {
        return Err(BankError::InvalidRatio(ratio));
    }
    Ok(())
}
