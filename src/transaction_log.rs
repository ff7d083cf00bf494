use crate::types::Transaction;

/// Append-only record of every state change, insertion order is chronological order
pub trait TransactionLog {
    fn append(&mut self, transaction: Transaction);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Transaction> + '_>;
}

/// A simple RAM-backed transaction log using a standard Rust `Vec`
#[derive(Debug, Default)]
pub struct VecTransactionLog {
    data_store: Vec<Transaction>,
}

impl VecTransactionLog {
    pub fn new() -> Self {
        Self {
            data_store: Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.data_store
    }
}

impl TransactionLog for VecTransactionLog {
    fn append(&mut self, transaction: Transaction) {
        self.data_store.push(transaction);
    }

    fn len(&self) -> usize {
        self.data_store.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Transaction> + '_> {
        Box::new(self.data_store.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::*;

    use rust_decimal_macros::dec;

    #[test]
    fn empty_log() {
        let log = VecTransactionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.iter().count(), 0);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut log = VecTransactionLog::new();

        let open = Transaction::OpenAccount(PartiesRecord {
            customer: 0,
            teller: 1,
        });
        let deposit = Transaction::Deposit(MonetaryTransactionRecord {
            customer: 0,
            teller: 1,
            amount: dec!(1.0),
        });
        let withdrawal = Transaction::Withdrawal(MonetaryTransactionRecord {
            customer: 0,
            teller: 2,
            amount: dec!(0.5),
        });
        log.append(open);
        log.append(deposit);
        log.append(withdrawal);

        assert_eq!(log.len(), 3);
        assert_eq!(log.as_slice(), &[open, deposit, withdrawal]);
        let tellers: Vec<_> = log.iter().map(Transaction::teller).collect();
        assert_eq!(tellers, vec![1, 1, 2]);
    }
}
