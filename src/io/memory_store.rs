//! In-memory persistence backend
//!
//! Keeps the last saved snapshot in a `Vec`. Used by the store's tests and by
//! embedders that do not want a file on disk.

use crate::core::traits::Persistence;
use crate::types::{Account, BankResult};

/// Persistence backend that never leaves memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    accounts: Vec<Account>,
    saves: usize,
}

impl MemoryStore {
    /// An empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that will load `accounts`
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        MemoryStore { accounts, saves: 0 }
    }

    /// The last saved (or initially seeded) snapshot
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Persistence for MemoryStore {
    fn load(&mut self) -> BankResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn save(&mut self, accounts: &[Account]) -> BankResult<()> {
        self.accounts = accounts.to_vec();
        self.saves += 1;
        Ok(())
    }
}
