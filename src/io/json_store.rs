//! JSON file persistence backend
//!
//! Stores the account collection as a single JSON array in one file.
//!
//! # Design
//!
//! The JsonFileStore delegates the layout to the json_format module and only
//! deals with the file system:
//! - A missing file loads as an empty collection
//! - A save writes the whole collection to a temporary file next to the target
//!   and renames it over the target, so readers never see a half-written file
//!
//! # Error Handling
//!
//! Every failure is returned to the caller: unreadable or unwritable files as
//! `IoError`, unparsable content as `ParseError`. Nothing is logged here.

use crate::core::traits::Persistence;
use crate::io::json_format::{decode_accounts, encode_accounts};
use crate::types::{Account, BankError, BankResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed persistence using the JSON account layout
///
/// # Examples
///
/// ```no_run
/// use bank_ledger::core::Bank;
/// use bank_ledger::io::JsonFileStore;
/// use rust_decimal::Decimal;
///
/// let mut bank = Bank::open(JsonFileStore::new("accounts.json")).unwrap();
/// let id = bank.create_account("Alice", "CARD123", Decimal::new(100, 0)).unwrap();
/// bank.deposit(id, Decimal::new(50, 0)).unwrap();
/// bank.save().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// The data file this backend reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Persistence for JsonFileStore {
    fn load(&mut self) -> BankResult<Vec<Account>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BankError::io(&self.path, e)),
        };

        decode_accounts(&contents).map_err(|message| BankError::parse(&self.path, message))
    }

    fn save(&mut self, accounts: &[Account]) -> BankResult<()> {
        let encoded = encode_accounts(accounts).map_err(|e| BankError::io(&self.path, e))?;

        let mut staging =
            NamedTempFile::new_in(self.directory()).map_err(|e| BankError::io(&self.path, e))?;
        staging
            .write_all(&encoded)
            .and_then(|_| staging.as_file().sync_all())
            .map_err(|e| BankError::io(&self.path, e))?;

        staging
            .persist(&self.path)
            .map_err(|e| BankError::io(&self.path, e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationKind;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("accounts.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut alice = Account::new(1, dec!(100), "Alice", "C1");
        alice.deposit(dec!(50)).unwrap();
        let bob = Account::new(2, dec!(200), "Bob", "C2");
        let accounts = vec![alice, bob];

        store.save(&accounts).unwrap();
        let loaded = JsonFileStore::new(store.path()).load().unwrap();

        assert_eq!(loaded, accounts);
        assert_eq!(loaded[0].last_operation(), OperationKind::Deposit);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store
            .save(&[
                Account::new(1, dec!(1), "A", ""),
                Account::new(2, dec!(2), "B", ""),
            ])
            .unwrap();
        store.save(&[Account::new(3, dec!(3), "C", "")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), 3);
    }

    #[test]
    fn test_save_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(&[Account::new(1, dec!(1), "A", "")]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("missing").join("accounts.json"));

        let result = store.save(&[Account::new(1, dec!(1), "A", "")]);

        match result {
            Err(BankError::IoError { path: Some(path), .. }) => {
                assert!(path.ends_with("accounts.json"))
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(BankError::ParseError { .. })));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        assert!(matches!(store.load(), Err(BankError::IoError { .. })));
    }

    #[test]
    fn test_relative_path_uses_current_directory() {
        let store = JsonFileStore::new("accounts.json");
        assert_eq!(store.directory(), Path::new("."));
    }
}
