//! CSV export of account snapshots
//!
//! Writes accounts with columns:
//! account, owner, card, balance, created, last_operation, last_operation_at
//!
//! Rows are sorted by account id for deterministic output and balances are
//! rendered with two decimal places.

use crate::types::Account;
use std::io::Write;

/// Column names of the account export
pub const CSV_HEADER: [&str; 7] = [
    "account",
    "owner",
    "card",
    "balance",
    "created",
    "last_operation",
    "last_operation_at",
];

/// Write account states to CSV format
///
/// # Arguments
///
/// * `accounts` - Slice of accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts: Vec<&Account> = accounts.iter().collect();
    sorted_accounts.sort_by_key(|account| account.id());

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.id().to_string(),
                account.owner_name().to_string(),
                account.card_id().to_string(),
                format!("{:.2}", account.balance()),
                account.created_at().to_string(),
                account.last_operation().to_string(),
                account.last_operation_at().to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
