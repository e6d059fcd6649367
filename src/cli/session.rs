//! Interactive menu session over one open store
//!
//! The session keeps a single `Bank` open until the user exits, so the id
//! counter never rewinds: an id handed out during the session is never handed
//! out again by it, even after that account is deleted. The collection is
//! saved once on exit, and only if something changed.
//!
//! Rejected operations (unknown account, bad amount, unparsable input) print
//! `Error: ...` and return to the menu. Failures of the data file or of the
//! terminal end the session.

use super::args::non_empty;
use super::commands::{write_details, write_table};
use crate::core::{Bank, Persistence};
use crate::types::{AccountId, BankError, BankResult};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const MENU: &str = "\n1. Create Account\n\
                    2. Delete Account\n\
                    3. Deposit\n\
                    4. Withdraw\n\
                    5. Show Account\n\
                    6. List Accounts\n\
                    0. Exit\n\
                    Choice: ";

/// Why a menu action stopped before completing
enum Interrupt {
    /// Input ran out in the middle of a prompt
    EndOfInput,
    /// The answer to a prompt could not be used
    Invalid(String),
    Failed(BankError),
}

impl From<BankError> for Interrupt {
    fn from(error: BankError) -> Self {
        Interrupt::Failed(error)
    }
}

impl From<io::Error> for Interrupt {
    fn from(error: io::Error) -> Self {
        Interrupt::Failed(error.into())
    }
}

/// Outcome of one menu action: whether it changed the store
type Action = Result<bool, Interrupt>;

/// Drive the menu until the user picks `0` or input ends
///
/// # Errors
///
/// Returns `IoError`/`ParseError` when the terminal or the final save fails.
/// Everything else is reported inline and the menu continues.
pub fn run_session<P: Persistence>(
    bank: &mut Bank<P>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> BankResult<()> {
    let mut changed = false;

    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            break;
        };

        let outcome = match choice.as_str() {
            "0" => break,
            "1" => create(bank, input, output),
            "2" => delete(bank, input, output),
            "3" => deposit(bank, input, output),
            "4" => withdraw(bank, input, output),
            "5" => show(bank, input, output),
            "6" => write_table(&bank.all_accounts(), output)
                .map(|_| false)
                .map_err(Interrupt::from),
            _ => {
                writeln!(output, "Invalid choice")?;
                continue;
            }
        };

        match outcome {
            Ok(action_changed) => changed |= action_changed,
            Err(Interrupt::EndOfInput) => break,
            Err(Interrupt::Invalid(message)) => writeln!(output, "Error: {}", message)?,
            Err(Interrupt::Failed(error)) if error.is_persistence() => return Err(error),
            Err(Interrupt::Failed(error)) => {
                debug!(error = %error, "menu action rejected");
                writeln!(output, "Error: {}", error)?;
            }
        }
    }

    if changed {
        bank.save()?;
        info!(accounts = bank.len(), "session saved");
    }
    Ok(())
}

fn create<P: Persistence>(
    bank: &mut Bank<P>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Action {
    let owner = ask(input, output, "Enter person name: ")?;
    let owner = non_empty(&owner).map_err(Interrupt::Invalid)?;
    let card = ask(input, output, "Enter national card ID: ")?;
    let card = non_empty(&card).map_err(Interrupt::Invalid)?;
    let initial: Decimal = ask_parsed(input, output, "Initial deposit (or 0): ")?;

    let id = bank.create_account(owner.as_str(), card, initial)?;
    info!(account = id, owner = %owner, "account created");
    writeln!(output, "The Account ID is: {}", id)?;
    Ok(true)
}

fn delete<P: Persistence>(
    bank: &mut Bank<P>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Action {
    let id: AccountId = ask_parsed(input, output, "Enter Account ID to delete: ")?;

    if bank.delete_account(id) {
        info!(account = id, "account deleted");
        writeln!(output, "Account {} deleted", id)?;
        Ok(true)
    } else {
        writeln!(output, "Account not found")?;
        Ok(false)
    }
}

fn deposit<P: Persistence>(
    bank: &mut Bank<P>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Action {
    let id: AccountId = ask_parsed(input, output, "Enter Account ID: ")?;
    let amount: Decimal = ask_parsed(input, output, "Amount: ")?;

    bank.deposit(id, amount)?;
    let balance = bank.account(id)?.balance();
    info!(account = id, amount = %amount, balance = %balance, "deposit applied");
    writeln!(output, "Deposit successful, balance: {:.2}", balance)?;
    Ok(true)
}

fn withdraw<P: Persistence>(
    bank: &mut Bank<P>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Action {
    let id: AccountId = ask_parsed(input, output, "Enter Account ID: ")?;
    let amount: Decimal = ask_parsed(input, output, "Amount: ")?;

    bank.withdraw(id, amount)?;
    let balance = bank.account(id)?.balance();
    info!(account = id, amount = %amount, balance = %balance, "withdrawal applied");
    writeln!(output, "Withdraw successful, balance: {:.2}", balance)?;
    Ok(true)
}

fn show<P: Persistence>(bank: &Bank<P>, input: &mut dyn BufRead, output: &mut dyn Write) -> Action {
    let id: AccountId = ask_parsed(input, output, "Enter Account ID: ")?;
    write_details(bank.account(id)?, output)?;
    Ok(false)
}

fn ask(input: &mut dyn BufRead, output: &mut dyn Write, prompt: &str) -> Result<String, Interrupt> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_line(input)?.ok_or(Interrupt::EndOfInput)
}

fn ask_parsed<T>(input: &mut dyn BufRead, output: &mut dyn Write, prompt: &str) -> Result<T, Interrupt>
where
    T: FromStr,
    T::Err: Display,
{
    let answer = ask(input, output, prompt)?;
    answer
        .parse()
        .map_err(|e| Interrupt::Invalid(format!("'{}' is not valid here: {}", answer, e)))
}

/// Next line without its line ending and surrounding blanks; `None` at end of input
fn read_line(input: &mut dyn BufRead) -> BankResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStore;
    use crate::types::{Account, OperationKind};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn session(bank: &mut Bank<MemoryStore>, script: &str) -> (BankResult<()>, String) {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let result = run_session(bank, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    fn empty_bank() -> Bank<MemoryStore> {
        Bank::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_ids_stay_unique_after_delete_within_session() {
        let mut bank = empty_bank();

        let (result, output) = session(
            &mut bank,
            "1\nAlice\nC1\n100\n2\n1\n1\nBob\nC2\n0\n0\n",
        );

        assert!(result.is_ok());
        assert!(output.contains("The Account ID is: 1\n"));
        assert!(output.contains("Account 1 deleted\n"));
        assert!(output.contains("The Account ID is: 2\n"));

        let saved = bank.persistence().accounts();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id(), 2);
        assert_eq!(saved[0].owner_name(), "Bob");
        assert_eq!(bank.persistence().save_count(), 1);
    }

    #[test]
    fn test_rejected_operations_keep_the_menu_running() {
        let mut bank = empty_bank();

        let (result, output) = session(
            &mut bank,
            "1\nAlice\nC1\n10\n4\n1\n50\n3\n9\n5\n3\n1\nabc\n1\nAlice\nC2\n5\n0\n",
        );

        assert!(result.is_ok());
        assert!(output.contains("Error: Insufficient balance"));
        assert!(output.contains("Error: Account 9 not found"));
        assert!(output.contains("Error: 'abc' is not valid here"));
        assert!(output.contains("The Account ID is: 2\n"));
        assert_eq!(bank.account(1).unwrap().balance(), dec!(10));
        assert_eq!(bank.account(2).unwrap().balance(), dec!(5));
    }

    #[test]
    fn test_deposit_withdraw_and_show() {
        let mut bank = empty_bank();

        let (result, output) = session(
            &mut bank,
            "1\nAlice Smith\nC1\n100\n3\n1\n50\n4\n1\n25.5\n5\n1\n0\n",
        );

        assert!(result.is_ok());
        assert!(output.contains("Deposit successful, balance: 150.00\n"));
        assert!(output.contains("Withdraw successful, balance: 124.50\n"));
        assert!(output.contains("Owner:           Alice Smith\n"));
        assert!(output.contains("Last operation:  Withdrawal\n"));
        assert_eq!(
            bank.persistence().accounts()[0].last_operation(),
            OperationKind::Withdrawal
        );
    }

    #[test]
    fn test_unknown_account_on_delete_is_reported() {
        let mut bank = empty_bank();

        let (result, output) = session(&mut bank, "2\n7\n0\n");

        assert!(result.is_ok());
        assert!(output.contains("Account not found\n"));
        assert_eq!(bank.persistence().save_count(), 0);
    }

    #[rstest]
    #[case::explicit_exit("5\n1\n6\n0\n")]
    #[case::end_of_input("6\n")]
    #[case::invalid_choice("9\n0\n")]
    fn test_read_only_session_does_not_save(#[case] script: &str) {
        let store = MemoryStore::with_accounts(vec![Account::new(1, dec!(3), "Alice", "C1")]);
        let mut bank = Bank::open(store).unwrap();

        let (result, _) = session(&mut bank, script);

        assert!(result.is_ok());
        assert_eq!(bank.persistence().save_count(), 0);
    }

    #[test]
    fn test_end_of_input_saves_changes() {
        let mut bank = empty_bank();

        let (result, output) = session(&mut bank, "1\nAlice\nC1\n5\n");

        assert!(result.is_ok());
        assert!(output.ends_with("Choice: "));
        assert_eq!(bank.persistence().accounts().len(), 1);
    }

    #[test]
    fn test_end_of_input_mid_prompt_saves_earlier_changes() {
        let mut bank = empty_bank();

        let (result, _) = session(&mut bank, "1\nAlice\nC1\n0\n3\n1\n");

        assert!(result.is_ok());
        assert_eq!(bank.persistence().accounts()[0].balance(), dec!(0));
        assert_eq!(bank.persistence().save_count(), 1);
    }

    #[rstest]
    #[case::blank_name("1\n \nC1\n0\n0\n")]
    #[case::blank_card("1\nAlice\n\n0\n0\n")]
    #[case::negative_opening("1\nAlice\nC1\n-5\n0\n")]
    fn test_create_rejects_bad_input(#[case] script: &str) {
        let mut bank = empty_bank();

        let (result, output) = session(&mut bank, script);

        assert!(result.is_ok());
        assert!(output.contains("Error: "));
        assert!(bank.is_empty());
        assert_eq!(bank.next_account_id(), Some(1));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let mut bank = empty_bank();

        let (_, output) = session(&mut bank, "transfer\n0\n");

        assert!(output.contains("Invalid choice\n"));
    }
}
