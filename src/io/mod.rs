//! I/O module
//!
//! Handles everything that crosses the process boundary.
//!
//! # Components
//!
//! - `json_format` - JSON data file layout (record conversion, encoding, decoding)
//! - `json_store` - File-backed persistence over the JSON layout
//! - `memory_store` - In-memory persistence for tests and embedding
//! - `csv_format` - CSV export of account snapshots

pub mod csv_format;
pub mod json_format;
pub mod json_store;
pub mod memory_store;

pub use csv_format::write_accounts_csv;
pub use json_format::{decode_accounts, encode_accounts, AccountRecord};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
