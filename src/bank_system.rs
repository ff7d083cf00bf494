use log::debug;

use crate::error::{BankError, Result};
use crate::types::{
    Account, Amount, CustomerId, MonetaryTransactionRecord, PartiesRecord, TellerId, Transaction,
};
use crate::{
    account_store::{AccountStore, VecAccountStore},
    transaction_log::{TransactionLog, VecTransactionLog},
};

/// Owns all accounts and the ledger, every balance change goes through here
///
/// Each successful mutating call appends exactly one transaction in the same call. Failing calls
/// validate everything up front and leave both the accounts and the ledger untouched.
#[derive(Debug, Default)]
pub struct BankSystem {
    account_store: VecAccountStore,
    transaction_log: VecTransactionLog,
}

impl BankSystem {
    pub fn new() -> Self {
        Self {
            account_store: VecAccountStore::new(),
            transaction_log: VecTransactionLog::new(),
        }
    }

    /// Open an empty account, the id is the number of accounts opened so far
    pub fn open_account(&mut self, name: &str, teller: TellerId) -> CustomerId {
        let customer = self.account_store.open(name);
        self.transaction_log
            .append(Transaction::OpenAccount(PartiesRecord { customer, teller }));

        debug!("Opened account (customer = {}, teller = {})", customer, teller);
        customer
    }

    pub fn deposit(
        &mut self,
        customer: CustomerId,
        teller: TellerId,
        amount: Amount,
    ) -> Result<()> {
        let account = self
            .account_store
            .get_mut(customer)
            .ok_or(BankError::NotFound(customer))?;
        if amount <= Amount::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }

        account.deposit(amount);
        self.transaction_log
            .append(Transaction::Deposit(MonetaryTransactionRecord {
                customer,
                teller,
                amount,
            }));

        debug!(
            "Deposited {} (customer = {}, teller = {})",
            amount, customer, teller
        );
        Ok(())
    }

    pub fn withdraw(
        &mut self,
        customer: CustomerId,
        teller: TellerId,
        amount: Amount,
    ) -> Result<()> {
        self.check_withdrawal(customer, amount)?;

        let account = self
            .account_store
            .get_mut(customer)
            .ok_or(BankError::NotFound(customer))?;
        account.withdraw(amount);
        self.transaction_log
            .append(Transaction::Withdrawal(MonetaryTransactionRecord {
                customer,
                teller,
                amount,
            }));

        debug!(
            "Withdrew {} (customer = {}, teller = {})",
            amount, customer, teller
        );
        Ok(())
    }

    /// Check whether `withdraw` would succeed, without touching any state
    pub fn check_withdrawal(&self, customer: CustomerId, amount: Amount) -> Result<()> {
        let account = self.get_account(customer)?;
        if amount <= Amount::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }
        if amount > account.balance() {
            return Err(BankError::InsufficientFunds {
                customer,
                balance: account.balance(),
                requested: amount,
            });
        }
        Ok(())
    }

    pub fn get_account(&self, customer: CustomerId) -> Result<&Account> {
        self.account_store
            .get(customer)
            .ok_or(BankError::NotFound(customer))
    }

    /// All accounts in id order
    pub fn get_accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.account_store.iter()
    }

    /// The full ledger in chronological order
    pub fn get_transactions(&self) -> &[Transaction] {
        self.transaction_log.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn open_deposit_withdraw() {
        let mut system = BankSystem::new();

        let customer = system.open_account("John Doe", 1);
        assert_eq!(customer, 0);

        system.deposit(customer, 1, dec!(100)).unwrap();
        assert_eq!(system.get_account(customer).unwrap().balance(), dec!(100));
        assert_eq!(system.get_transactions().len(), 2);

        system.withdraw(customer, 2, dec!(50)).unwrap();
        assert_eq!(system.get_account(customer).unwrap().balance(), dec!(50));
        assert_eq!(system.get_transactions().len(), 3);
        assert_eq!(
            system.get_transactions()[2].description(),
            "Teller 2 withdrew 50 from account 0"
        );
    }

    #[test]
    fn ids_follow_call_order() {
        let mut system = BankSystem::new();

        let ids: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|name| system.open_account(name, 1))
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);

        let names: Vec<_> = system.get_accounts().map(|account| account.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn withdraw_more_than_balance() {
        let mut system = BankSystem::new();
        let customer = system.open_account("John Doe", 1);
        system.deposit(customer, 1, dec!(10)).unwrap();

        let err = system.withdraw(customer, 1, dec!(10.01)).unwrap_err();
        assert_eq!(
            err,
            BankError::InsufficientFunds {
                customer,
                balance: dec!(10),
                requested: dec!(10.01),
            }
        );

        // nothing changed after the rejection
        assert_eq!(system.get_account(customer).unwrap().balance(), dec!(10));
        assert_eq!(system.get_transactions().len(), 2);
    }

    #[test]
    fn withdraw_entire_balance() {
        let mut system = BankSystem::new();
        let customer = system.open_account("John Doe", 1);
        system.deposit(customer, 1, dec!(10)).unwrap();

        system.withdraw(customer, 1, dec!(10)).unwrap();
        assert_eq!(
            system.get_account(customer).unwrap().balance(),
            Amount::ZERO
        );
    }

    #[test]
    fn unknown_customer() {
        let mut system = BankSystem::new();

        assert_eq!(
            system.deposit(0, 1, dec!(1)).unwrap_err(),
            BankError::NotFound(0)
        );
        assert_eq!(
            system.withdraw(0, 1, dec!(1)).unwrap_err(),
            BankError::NotFound(0)
        );
        assert_eq!(system.get_account(0).unwrap_err(), BankError::NotFound(0));
        assert!(system.get_transactions().is_empty());
    }

    #[test]
    fn non_positive_amounts() {
        let mut system = BankSystem::new();
        let customer = system.open_account("John Doe", 1);

        system.deposit(customer, 1, Amount::ZERO).unwrap_err();
        system.deposit(customer, 1, dec!(-1)).unwrap_err();
        system.withdraw(customer, 1, dec!(-1)).unwrap_err();
        assert_eq!(system.get_transactions().len(), 1);
        assert_eq!(
            system.get_account(customer).unwrap().balance(),
            Amount::ZERO
        );
    }

    #[test]
    fn deposit_withdraw_round_trip() {
        let mut system = BankSystem::new();
        let customer = system.open_account("John Doe", 1);
        system.deposit(customer, 1, dec!(7.25)).unwrap();

        system.deposit(customer, 1, dec!(0.333)).unwrap();
        system.withdraw(customer, 1, dec!(0.333)).unwrap();
        assert_eq!(system.get_account(customer).unwrap().balance(), dec!(7.25));
    }
}
