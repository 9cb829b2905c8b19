//! Storage layer for the expense ledger
//!
//! The ledger itself lives in memory only; `file_io` provides the atomic
//! write helpers used for settings and exports.

pub mod file_io;
pub mod ledger;

pub use file_io::{write_atomic, write_json_atomic};
pub use ledger::LedgerStore;
