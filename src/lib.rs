//! Bank Ledger Library
//! # Overview
//!
//! This library manages a small set of bank accounts held in memory and
//! persisted as a JSON array in a single data file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Timestamp, BankError)
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Account store, id allocation and save orchestration
//!   - [`core::traits`] - Persistence abstraction the store is built against
//! - [`io`] - Persistence backends (JSON file, in-memory) and CSV export
//! - [`cli`] - Command-line front-end
//!
//! # Accounts
//!
//! Each account maintains:
//! - `balance`: never negative; moved only by deposits and withdrawals
//! - `owner_name` and `card_id`: free-form metadata
//! - `created_at`: set once when the account is opened
//! - `last_operation` / `last_operation_at`: kind and time of the last
//!   deposit or withdrawal
//!
//! # Persistence
//!
//! The store loads everything when opened and writes only when
//! [`core::Bank::save`] is called. Account ids are allocated from a counter
//! that never moves backwards, so a deleted id is not handed out again while
//! the store is open.

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{Bank, Persistence};
pub use io::{JsonFileStore, MemoryStore};
pub use types::{Account, AccountId, BankError, BankResult, OperationKind, Timestamp};
