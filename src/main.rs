#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use log::info;
use rust_decimal::Decimal;

use bank_ledger::{
    bank::Bank,
    report::write_accounts,
    script::{iter_operations, run_script},
    teller::TellerSelection,
};

/// Replay of the classic walk-through when no script is given
fn run_demo(bank: &mut Bank) -> Result<()> {
    let branch = bank.add_branch("123 Main Street", Decimal::from(1000))?;
    let mut desk = bank.at(branch)?;
    desk.add_teller(1).add_teller(2);

    let customer = desk.open_account("John Doe")?;
    desk.deposit(customer, Decimal::from(100))?;
    desk.withdraw(customer, Decimal::from(50))?;
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1); // skip executable name
    let script = args.next();
    let accounts_out = args.next();

    let mut bank = Bank::with_selection(TellerSelection::from_env()?);

    match script {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Could not read input file (path = {})", path))?;
            let rejected = run_script(&mut bank, iter_operations(file));
            info!("Replayed script (path = {}, rejected = {})", path, rejected);
        }
        None => run_demo(&mut bank)?,
    }

    bank.print_transactions()?;

    if let Some(path) = accounts_out {
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("Could not write accounts file (path = {})", path))?;
        write_accounts(&mut file, bank.system().get_accounts())?;
    }

    Ok(())
}
