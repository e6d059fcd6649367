use crate::types::AccountId;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage bank accounts stored in a JSON data file
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage bank accounts stored in a JSON data file", long_about = None)]
pub struct CliArgs {
    /// JSON file holding the accounts
    #[arg(
        long = "data-file",
        value_name = "PATH",
        env = "BANK_LEDGER_DATA",
        default_value = "accounts.json",
        global = true,
        help = "Path to the JSON data file (created on first save)"
    )]
    pub data_file: PathBuf,

    /// Log verbosity, repeat for more detail
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered on the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a new account and print its id
    ///
    /// Each invocation resumes numbering after the highest id in the data
    /// file. Deleting the newest account therefore lets a later invocation
    /// issue its id again; run `shell` to keep ids unique across a series of
    /// operations.
    Create {
        #[arg(long, value_name = "NAME", value_parser = non_empty)]
        owner: String,

        #[arg(long, value_name = "CARD", value_parser = non_empty)]
        card: String,

        #[arg(
            long,
            value_name = "AMOUNT",
            default_value = "0",
            allow_negative_numbers = true
        )]
        initial: Decimal,
    },

    /// Delete an account
    ///
    /// The id of a deleted account may be issued again by a later invocation
    /// if no higher id remains in the data file.
    Delete {
        #[arg(value_name = "ID")]
        id: AccountId,
    },

    /// Deposit funds into an account
    Deposit {
        #[arg(value_name = "ID")]
        id: AccountId,

        #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        #[arg(value_name = "ID")]
        id: AccountId,

        #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Show the details of one account
    Show {
        #[arg(value_name = "ID")]
        id: AccountId,
    },

    /// List accounts
    List {
        /// Only accounts held by this owner
        #[arg(long, value_name = "NAME")]
        owner: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Change the owner name of an account
    Rename {
        #[arg(value_name = "ID")]
        id: AccountId,

        #[arg(value_name = "NAME", value_parser = non_empty)]
        name: String,
    },

    /// Change the card id of an account
    SetCard {
        #[arg(value_name = "ID")]
        id: AccountId,

        #[arg(value_name = "CARD", value_parser = non_empty)]
        card: String,
    },

    /// Start an interactive menu session
    ///
    /// The data file is opened once and saved on exit. Ids issued during the
    /// session are never issued again by it, even after deletion.
    Shell,
}

/// Output layout for `list`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

pub(super) fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
