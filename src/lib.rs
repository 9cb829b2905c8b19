//! Expense Ledger - personal expense tracking
//!
//! This library provides the core of the expense ledger: an in-memory store of
//! expense records, a filter engine that derives the visible view, and a CSV
//! exporter for that view.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, months, categories)
//! - `storage`: The in-memory ledger store and atomic file writes
//! - `services`: Filtering and input validation
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_ledger::models::Month;
//! use expense_ledger::services::ExpenseFilter;
//! use expense_ledger::storage::LedgerStore;
//!
//! let store = LedgerStore::with_sample_data(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
//! let view = ExpenseFilter::new()
//!     .text("bus")
//!     .month(Month::new(2024, 5).unwrap())
//!     .apply(&store.list());
//! assert_eq!(view.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
