//! Core traits for account persistence
//!
//! The store never touches files directly; it talks to a [`Persistence`]
//! backend that is handed to it at construction. This keeps the store
//! testable with an in-memory backend and lets other formats be added without
//! changing the store.

use crate::types::{Account, BankResult};

/// Trait for loading and saving the full account collection
///
/// Implementations move the whole collection at once; there are no partial or
/// incremental writes.
pub trait Persistence {
    /// Load every persisted account
    ///
    /// A backend with nothing stored yet returns an empty collection rather
    /// than an error.
    fn load(&mut self) -> BankResult<Vec<Account>>;

    /// Replace the persisted collection with `accounts`
    fn save(&mut self, accounts: &[Account]) -> BankResult<()>;
}

impl<P: Persistence + ?Sized> Persistence for &mut P {
    fn load(&mut self) -> BankResult<Vec<Account>> {
        (**self).load()
    }

    fn save(&mut self, accounts: &[Account]) -> BankResult<()> {
        (**self).save(accounts)
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&mut self) -> BankResult<Vec<Account>> {
        (**self).load()
    }

    fn save(&mut self, accounts: &[Account]) -> BankResult<()> {
        (**self).save(accounts)
    }
}
