//! Core data models for the expense ledger
//!
//! This module contains the data structures of the ledger domain: expense
//! records, their identifiers, amounts, months and categories.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{category_filter_choices, ALL_CATEGORIES, DEFAULT_CATEGORIES, DEFAULT_CATEGORY};
pub use expense::{Expense, ExpenseDetails};
pub use ids::ExpenseId;
pub use money::{Amount, AmountParseError};
pub use month::{Month, MonthParseError};
