//! JSON format handling for the account data file
//!
//! This module centralizes the on-disk layout of accounts, providing:
//! - AccountRecord structure mirroring one element of the JSON array
//! - Conversion between records and the Account entity
//! - Encoding and decoding of the whole array
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Layout
//!
//! ```json
//! [
//!     {
//!         "accountId": 1,
//!         "balance": 150.0,
//!         "personName": "Alice",
//!         "cardId": "CARD123",
//!         "creationTime": "2024-01-01 10:00:00",
//!         "lastOperationType": "Deposit",
//!         "lastOperationTime": "2024-01-01 10:05:00"
//!     }
//! ]
//! ```

use crate::types::{Account, AccountId, OperationKind, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// One account as stored in the data file
///
/// Every field is optional on input. Missing identity and balance fields fall
/// back to zero or empty values; missing timestamps fall back to the load
/// time and a missing operation type to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(default)]
    pub account_id: AccountId,

    /// Written as a JSON number carrying every digit of the decimal
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    #[serde(default)]
    pub person_name: String,

    #[serde(default)]
    pub card_id: String,

    #[serde(default)]
    pub creation_time: Option<Timestamp>,

    #[serde(default)]
    pub last_operation_type: Option<OperationKind>,

    #[serde(default)]
    pub last_operation_time: Option<Timestamp>,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        AccountRecord {
            account_id: account.id(),
            balance: account.balance(),
            person_name: account.owner_name().to_string(),
            card_id: account.card_id().to_string(),
            creation_time: Some(account.created_at()),
            last_operation_type: Some(account.last_operation()),
            last_operation_time: Some(account.last_operation_at()),
        }
    }
}

impl AccountRecord {
    /// Convert the record into an Account, filling in defaults
    ///
    /// # Returns
    ///
    /// - Ok(Account) - the restored account
    /// - Err(String) - the record holds a negative balance
    pub fn into_account(self) -> Result<Account, String> {
        if self.balance < Decimal::ZERO {
            return Err(format!(
                "account {} has negative balance {}",
                self.account_id, self.balance
            ));
        }

        let now = Timestamp::now();
        Ok(Account::restore(
            self.account_id,
            self.balance,
            self.person_name,
            self.card_id,
            self.creation_time.unwrap_or(now),
            self.last_operation_type.unwrap_or_default(),
            self.last_operation_time.unwrap_or(now),
        ))
    }
}

/// Decode the content of a data file
///
/// Blank input decodes to an empty collection. Anything else must be a JSON
/// array of account objects.
///
/// # Returns
///
/// - Ok(Vec<Account>) - accounts in file order
/// - Err(String) - description of the first problem found
pub fn decode_accounts(input: &str) -> Result<Vec<Account>, String> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<AccountRecord> =
        serde_json::from_str(input).map_err(|e| e.to_string())?;

    records
        .into_iter()
        .map(AccountRecord::into_account)
        .collect()
}

/// Encode accounts as a pretty-printed JSON array
///
/// Uses four-space indentation and a trailing newline.
pub fn encode_accounts(accounts: &[Account]) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<AccountRecord> = accounts.iter().map(AccountRecord::from).collect();

    let mut output = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    records.serialize(&mut serializer)?;
    output.push(b'\n');

    Ok(output)
}
