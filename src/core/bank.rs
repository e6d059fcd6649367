//! Account store module
//!
//! This module provides the `Bank` struct which owns every account in memory,
//! allocates account ids and delegates durable storage to an injected
//! [`Persistence`] backend.
//!
//! The Bank is responsible for:
//! - Loading the persisted collection when it is opened
//! - Allocating strictly increasing account ids that are never reused
//! - Routing deposits and withdrawals to the right account
//! - Saving the full collection when the caller asks for it
//!
//! Mutations only touch the in-memory collection. Nothing is written until
//! [`Bank::save`] is called.

use crate::core::traits::Persistence;
use crate::types::{Account, AccountId, BankError, BankResult};
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Id handed to the first account of an empty store
pub const FIRST_ACCOUNT_ID: AccountId = 1;

/// In-memory account store backed by a persistence layer
///
/// Callers only ever see shared references or clones of the accounts; every
/// change goes through a `Bank` method.
pub struct Bank<P: Persistence> {
    /// Map of account ids to accounts
    accounts: HashMap<AccountId, Account>,

    /// Id for the next created account, `None` once the id space is used up
    next_account_id: Option<AccountId>,

    persistence: P,
}

impl<P: Persistence> Bank<P> {
    /// Open a store over `persistence`, loading whatever it holds
    ///
    /// The id counter starts one past the highest loaded id, or at
    /// [`FIRST_ACCOUNT_ID`] when nothing was loaded.
    ///
    /// # Errors
    ///
    /// - Any error reported by the backend's `load`
    /// - `IdCollision` if two loaded accounts share an id
    pub fn open(mut persistence: P) -> BankResult<Self> {
        let loaded = persistence.load()?;

        let mut accounts = HashMap::with_capacity(loaded.len());
        for account in loaded {
            match accounts.entry(account.id()) {
                Entry::Occupied(_) => return Err(BankError::id_collision(account.id())),
                Entry::Vacant(slot) => {
                    slot.insert(account);
                }
            }
        }

        let next_account_id = match accounts.keys().max() {
            Some(highest) => highest.checked_add(1),
            None => Some(FIRST_ACCOUNT_ID),
        };

        Ok(Bank {
            accounts,
            next_account_id,
            persistence,
        })
    }

    /// Open a new account and return its id
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `initial_balance` is negative
    /// - `AccountIdsExhausted` if no id is left to allocate
    /// - `IdCollision` if the allocated id is somehow already taken
    pub fn create_account(
        &mut self,
        owner_name: impl Into<String>,
        card_id: impl Into<String>,
        initial_balance: Decimal,
    ) -> BankResult<AccountId> {
        if initial_balance < Decimal::ZERO {
            return Err(BankError::invalid_amount("account opening", initial_balance));
        }

        let id = self.next_account_id.ok_or(BankError::AccountIdsExhausted)?;

        match self.accounts.entry(id) {
            Entry::Occupied(_) => Err(BankError::id_collision(id)),
            Entry::Vacant(slot) => {
                slot.insert(Account::new(id, initial_balance, owner_name, card_id));
                self.next_account_id = id.checked_add(1);
                Ok(id)
            }
        }
    }

    /// Remove an account, returning whether it existed
    ///
    /// The id is not handed out again.
    pub fn delete_account(&mut self, id: AccountId) -> bool {
        self.accounts.remove(&id).is_some()
    }

    /// Deposit `amount` into account `id`
    pub fn deposit(&mut self, id: AccountId, amount: Decimal) -> BankResult<()> {
        self.account_mut(id)?.deposit(amount)
    }

    /// Withdraw `amount` from account `id`
    pub fn withdraw(&mut self, id: AccountId, amount: Decimal) -> BankResult<()> {
        self.account_mut(id)?.withdraw(amount)
    }

    /// Look up an account
    pub fn account(&self, id: AccountId) -> BankResult<&Account> {
        self.accounts
            .get(&id)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    /// Snapshot of every account, sorted by id
    pub fn all_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by_key(Account::id);
        accounts
    }

    /// Snapshot of the accounts held by `owner_name`, sorted by id
    pub fn accounts_for_owner(&self, owner_name: &str) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .values()
            .filter(|account| account.owner_name() == owner_name)
            .cloned()
            .collect();
        accounts.sort_by_key(Account::id);
        accounts
    }

    /// Replace the owner name of account `id`
    pub fn rename_owner(
        &mut self,
        id: AccountId,
        owner_name: impl Into<String>,
    ) -> BankResult<()> {
        self.account_mut(id)?.set_owner_name(owner_name);
        Ok(())
    }

    /// Replace the card id of account `id`
    pub fn update_card_id(
        &mut self,
        id: AccountId,
        card_id: impl Into<String>,
    ) -> BankResult<()> {
        self.account_mut(id)?.set_card_id(card_id);
        Ok(())
    }

    /// Push the full collection to the persistence backend
    pub fn save(&mut self) -> BankResult<()> {
        let snapshot = self.all_accounts();
        self.persistence.save(&snapshot)
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Id the next created account will receive, if any are left
    pub fn next_account_id(&self) -> Option<AccountId> {
        self.next_account_id
    }

    /// The backend this store saves to
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn account_mut(&mut self, id: AccountId) -> BankResult<&mut Account> {
        self.accounts
            .get_mut(&id)
            .ok_or_else(|| BankError::account_not_found(id))
    }
}
