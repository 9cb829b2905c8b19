//! Service layer for the expense ledger
//!
//! Logic that sits on top of the store: deriving the filtered view and
//! validating user input before it reaches the store.

pub mod filter;
pub mod validation;

pub use filter::ExpenseFilter;
pub use validation::ExpenseForm;
