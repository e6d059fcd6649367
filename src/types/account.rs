//! Account entity for the bank ledger
//!
//! This module defines the Account structure and the balance operations that
//! enforce its invariants. Everything an account does stays within its own
//! state; there is no I/O here.

use super::error::{BankError, BankResult};
use super::timestamp::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier
///
/// Allocated by the store, unique and never reused within a data file.
pub type AccountId = u32;

/// Kind of the last balance-changing operation applied to an account
///
/// Serialized as `"None"`, `"Deposit"` or `"Withdrawal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationKind {
    /// No deposit or withdrawal since the account was opened
    #[default]
    None,
    Deposit,
    Withdrawal,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::None => "None",
            OperationKind::Deposit => "Deposit",
            OperationKind::Withdrawal => "Withdrawal",
        };
        f.write_str(name)
    }
}

/// A single bank account
///
/// Holds the balance and the descriptive metadata of one account. The balance
/// can only move through [`Account::deposit`] and [`Account::withdraw`], which
/// reject non-positive amounts and overdrafts and leave the account untouched
/// when they fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
    owner_name: String,
    card_id: String,
    created_at: Timestamp,
    last_operation: OperationKind,
    last_operation_at: Timestamp,
}

impl Account {
    /// Open a new account
    ///
    /// Both timestamps are set to the current time and the last operation is
    /// [`OperationKind::None`]. The opening balance is taken as given; callers
    /// that need to reject negative balances do so before construction.
    pub fn new(
        id: AccountId,
        initial_balance: Decimal,
        owner_name: impl Into<String>,
        card_id: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Account {
            id,
            balance: initial_balance,
            owner_name: owner_name.into(),
            card_id: card_id.into(),
            created_at: now,
            last_operation: OperationKind::None,
            last_operation_at: now,
        }
    }

    /// Rebuild an account from previously persisted values, verbatim
    pub fn restore(
        id: AccountId,
        balance: Decimal,
        owner_name: String,
        card_id: String,
        created_at: Timestamp,
        last_operation: OperationKind,
        last_operation_at: Timestamp,
    ) -> Self {
        Account {
            id,
            balance,
            owner_name,
            card_id,
            created_at,
            last_operation,
            last_operation_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_operation(&self) -> OperationKind {
        self.last_operation
    }

    pub fn last_operation_at(&self) -> Timestamp {
        self.last_operation_at
    }

    pub fn set_owner_name(&mut self, name: impl Into<String>) {
        self.owner_name = name.into();
    }

    pub fn set_card_id(&mut self, card_id: impl Into<String>) {
        self.card_id = card_id.into();
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `ArithmeticOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.id))?;

        self.balance = new_balance;
        self.record_operation(OperationKind::Deposit);
        Ok(())
    }

    /// Debit funds from the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `InsufficientBalance` if `amount` exceeds the current balance
    pub fn withdraw(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount("withdrawal", amount));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_balance(
                self.id,
                self.balance,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", self.id))?;

        self.balance = new_balance;
        self.record_operation(OperationKind::Withdrawal);
        Ok(())
    }

    fn record_operation(&mut self, kind: OperationKind) {
        self.last_operation = kind;
        self.last_operation_at = Timestamp::now();
    }
}
