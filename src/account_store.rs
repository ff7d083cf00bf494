use crate::types::{Account, CustomerId};

/// Store the accounts of all customers, indexed by their id
pub trait AccountStore {
    /// Create an empty account and return its id
    /// Ids are handed out as 0, 1, 2, ... and are never reused.
    fn open(&mut self, name: &str) -> CustomerId;

    fn get(&self, customer: CustomerId) -> Option<&Account>;

    fn get_mut(&mut self, customer: CustomerId) -> Option<&mut Account>;

    /// Number of accounts ever opened
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All accounts in id order
    fn iter(&self) -> Box<dyn Iterator<Item = &Account> + '_>;
}

/// A simple RAM-backed account store, the id is the position in a `Vec`
#[derive(Debug, Default)]
pub struct VecAccountStore {
    data_store: Vec<Account>,
}

impl VecAccountStore {
    pub fn new() -> Self {
        Self {
            data_store: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a VecAccountStore {
    type Item = &'a Account;

    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.data_store.iter()
    }
}

impl AccountStore for VecAccountStore {
    fn open(&mut self, name: &str) -> CustomerId {
        // ids are u32, more than u32::MAX + 1 accounts are not supported
        let customer = self.data_store.len() as CustomerId;
        self.data_store.push(Account::new(customer, name));
        customer
    }

    fn get(&self, customer: CustomerId) -> Option<&Account> {
        self.data_store.get(customer as usize)
    }

    fn get_mut(&mut self, customer: CustomerId) -> Option<&mut Account> {
        self.data_store.get_mut(customer as usize)
    }

    fn len(&self) -> usize {
        self.data_store.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        Box::new(self.data_store.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Amount;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_store() {
        let store = VecAccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
        assert!(store.get(0).is_none());
    }

    #[test]
    fn ids_are_sequential() {
        let mut store = VecAccountStore::new();

        assert_eq!(store.open("Alice"), 0);
        assert_eq!(store.open("Bob"), 1);
        assert_eq!(store.open("Alice"), 2);

        let names: Vec<_> = store.iter().map(|account| account.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
    }

    #[test]
    fn new_account_is_empty() {
        let mut store = VecAccountStore::new();
        let customer = store.open("John Doe");

        let account = store.get(customer).unwrap();
        assert_eq!(account.customer(), customer);
        assert_eq!(account.balance(), Amount::ZERO);
    }

    #[test]
    fn mutate_through_store() {
        let mut store = VecAccountStore::new();
        let customer = store.open("John Doe");

        store.get_mut(customer).unwrap().deposit(dec!(3.0));
        assert_eq!(store.get(customer).unwrap().balance(), dec!(3.0));
        assert!(store.get_mut(1).is_none());
    }

    #[test]
    fn iterate_by_reference() {
        let mut store = VecAccountStore::new();
        store.open("Alice");
        store.open("Bob");

        let ids: Vec<_> = (&store).into_iter().map(Account::customer).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
