//! Command execution for the bank-ledger binary
//!
//! Each invocation opens the store over the data file, applies one command and,
//! for commands that change anything, saves the collection back before
//! returning. Read-only commands never touch the file. `shell` hands the open
//! store to an interactive session instead.

use super::args::{Command, OutputFormat};
use super::session::run_session;
use crate::core::Bank;
use crate::io::{write_accounts_csv, JsonFileStore};
use crate::types::{Account, BankError, BankResult};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Run `command` against the accounts stored in `data_file`
///
/// Human-readable results go to `output`; failures are returned unchanged so
/// the caller can report them. Only `shell` reads from `input`.
pub fn execute(
    command: &Command,
    data_file: &Path,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> BankResult<()> {
    let mut bank = Bank::open(JsonFileStore::new(data_file))?;
    debug!(
        path = %data_file.display(),
        accounts = bank.len(),
        "opened account store"
    );

    match command {
        Command::Create {
            owner,
            card,
            initial,
        } => {
            let id = bank.create_account(owner.as_str(), card.as_str(), *initial)?;
            save(&mut bank)?;
            info!(account = id, owner = %owner, "account created");
            writeln!(output, "The Account ID is: {}", id)?;
        }

        Command::Delete { id } => {
            if !bank.delete_account(*id) {
                return Err(BankError::account_not_found(*id));
            }
            save(&mut bank)?;
            info!(account = id, "account deleted");
            writeln!(output, "Account {} deleted", id)?;
        }

        Command::Deposit { id, amount } => {
            bank.deposit(*id, *amount)?;
            save(&mut bank)?;
            let balance = bank.account(*id)?.balance();
            info!(account = id, amount = %amount, balance = %balance, "deposit applied");
            writeln!(output, "Deposit successful, balance: {:.2}", balance)?;
        }

        Command::Withdraw { id, amount } => {
            bank.withdraw(*id, *amount)?;
            save(&mut bank)?;
            let balance = bank.account(*id)?.balance();
            info!(account = id, amount = %amount, balance = %balance, "withdrawal applied");
            writeln!(output, "Withdraw successful, balance: {:.2}", balance)?;
        }

        Command::Show { id } => {
            write_details(bank.account(*id)?, output)?;
        }

        Command::List { owner, format } => {
            let accounts = match owner {
                Some(name) => bank.accounts_for_owner(name),
                None => bank.all_accounts(),
            };
            match format {
                OutputFormat::Table => write_table(&accounts, output)?,
                OutputFormat::Csv => write_accounts_csv(&accounts, output)
                    .map_err(|message| BankError::IoError {
                        path: None,
                        message,
                    })?,
            }
        }

        Command::Rename { id, name } => {
            bank.rename_owner(*id, name.as_str())?;
            save(&mut bank)?;
            info!(account = id, owner = %name, "owner renamed");
            writeln!(output, "Account {} now belongs to {}", id, name)?;
        }

        Command::SetCard { id, card } => {
            bank.update_card_id(*id, card.as_str())?;
            save(&mut bank)?;
            info!(account = id, "card id updated");
            writeln!(output, "Account {} card set to {}", id, card)?;
        }

        Command::Shell => {
            run_session(&mut bank, input, output)?;
        }
    }

    Ok(())
}

fn save(bank: &mut Bank<JsonFileStore>) -> BankResult<()> {
    bank.save()?;
    debug!(
        path = %bank.persistence().path().display(),
        accounts = bank.len(),
        "account store saved"
    );
    Ok(())
}

pub(super) fn write_details(account: &Account, output: &mut dyn Write) -> BankResult<()> {
    writeln!(output, "Account ID:      {}", account.id())?;
    writeln!(output, "Owner:           {}", account.owner_name())?;
    writeln!(output, "Card ID:         {}", account.card_id())?;
    writeln!(output, "Balance:         {:.2}", account.balance())?;
    writeln!(output, "Created:         {}", account.created_at())?;
    writeln!(output, "Last operation:  {}", account.last_operation())?;
    writeln!(output, "Last changed:    {}", account.last_operation_at())?;
    Ok(())
}

pub(super) fn write_table(accounts: &[Account], output: &mut dyn Write) -> BankResult<()> {
    if accounts.is_empty() {
        writeln!(output, "No accounts")?;
        return Ok(());
    }

    writeln!(
        output,
        "{:>6}  {:<20}  {:<12}  {:>14}  {:<10}  {}",
        "ID", "OWNER", "CARD", "BALANCE", "LAST OP", "LAST CHANGED"
    )?;
    for account in accounts {
        writeln!(
            output,
            "{:>6}  {:<20}  {:<12}  {:>14}  {:<10}  {}",
            account.id(),
            account.owner_name(),
            account.card_id(),
            format!("{:.2}", account.balance()),
            account.last_operation().to_string(),
            account.last_operation_at()
        )?;
    }
    Ok(())
}
