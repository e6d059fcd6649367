//! Core business logic module
//!
//! This module contains the account store and its seams:
//! - `traits` - Persistence abstraction the store is built against
//! - `bank` - In-memory account store, id allocation and save orchestration

pub mod bank;
pub mod traits;

pub use bank::{Bank, FIRST_ACCOUNT_ID};
pub use traits::Persistence;
