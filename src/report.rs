use anyhow::Result;
use csv;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::types::{Account, Transaction};

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Account", 3)?;
        state.serialize_field("customer", &self.customer())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("balance", &self.balance())?;
        state.end()
    }
}

/// Write the description of every transaction to the provided destination, one per line
pub fn write_transactions<'a>(
    destination: &mut dyn std::io::Write,
    transactions: impl Iterator<Item = &'a Transaction>,
) -> Result<()> {
    for transaction in transactions {
        writeln!(destination, "{}", transaction)?;
    }
    destination.flush()?;
    Ok(())
}

/// Write all accounts to the provided destination (in CSV format)
pub fn write_accounts<'a>(
    destination: &mut dyn std::io::Write,
    accounts: impl Iterator<Item = &'a Account>,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(destination);

    for account in accounts {
        writer.serialize(account)?;
    }
    writer.flush()?;
    Ok(())
}
