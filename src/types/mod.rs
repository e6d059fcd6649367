//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its identifiers
//! - `timestamp`: second-precision local timestamps
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod timestamp;

pub use account::{Account, AccountId, OperationKind};
pub use error::{BankError, BankResult};
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
