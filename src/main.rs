//! Bank ledger CLI
//!
//! Command-line front-end over the account store, keeping accounts in a JSON
//! data file.
//!
//! # Usage
//!
//! ```bash
//! bank-ledger create --owner Alice --card CARD123 --initial 100
//! bank-ledger deposit 1 50
//! bank-ledger withdraw 1 20.5
//! bank-ledger show 1
//! bank-ledger list --format csv > accounts.csv
//! bank-ledger --data-file /var/lib/bank/accounts.json delete 1
//! bank-ledger shell
//! ```
//!
//! The data file defaults to `accounts.json` in the working directory and can
//! also be set through `BANK_LEDGER_DATA`. Commands that change an account save
//! the whole collection back before exiting.
//!
//! One-shot commands reopen the data file each time, so numbering resumes after
//! the highest stored id. `shell` keeps the file open for a whole menu session;
//! ids it issues are never reused within that session.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown account, invalid amount, unreadable data file, etc.)

use bank_ledger::cli;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
