//! Expense model
//!
//! A single dated, categorized spending record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Amount;

/// The mutable fields of an expense
///
/// Used both to create a record and to overwrite one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDetails {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: Amount,
}

impl ExpenseDetails {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

/// An expense record held by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Assigned at creation, never changes
    pub id: ExpenseId,

    pub date: NaiveDate,

    pub category: String,

    #[serde(default)]
    pub description: String,

    pub amount: Amount,
}

impl Expense {
    /// Create a record with a fresh ID
    pub fn new(details: ExpenseDetails) -> Self {
        Self {
            id: ExpenseId::new(),
            date: details.date,
            category: details.category,
            description: details.description,
            amount: details.amount,
        }
    }

    /// Overwrite every mutable field, keeping the ID
    pub fn apply(&mut self, details: ExpenseDetails) {
        self.date = details.date;
        self.category = details.category;
        self.description = details.description;
        self.amount = details.amount;
    }

    /// Copy of the mutable fields
    pub fn details(&self) -> ExpenseDetails {
        ExpenseDetails {
            date: self.date,
            category: self.category.clone(),
            description: self.description.clone(),
            amount: self.amount,
        }
    }
}
