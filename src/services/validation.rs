//! Input validation for expense forms
//!
//! The ledger store trusts whatever it is given. This is the layer in front of
//! it that turns raw user input into `ExpenseDetails` or rejects it.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, ExpenseDetails, DEFAULT_CATEGORY};

const INVALID_AMOUNT: &str = "Enter a valid positive amount.";
const AMOUNT_TOO_LARGE: &str = "Amount cannot exceed 999999999999999.99.";

/// Raw values collected from the user before validation
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
    /// Defaults to "General" when absent or blank
    pub category: Option<String>,
    pub description: String,
    /// Unparsed amount text
    pub amount: String,
}

impl ExpenseForm {
    /// Pre-fill a form from an existing expense (for editing)
    pub fn from_details(details: &ExpenseDetails) -> Self {
        Self {
            date: Some(details.date),
            category: Some(details.category.clone()),
            description: details.description.clone(),
            amount: details.amount.value().normalize().to_string(),
        }
    }

    /// Validate the form, filling in defaults
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the amount is missing, unparsable,
    /// zero, negative or above `Amount::max_entry()`.
    pub fn validate(&self, today: NaiveDate) -> LedgerResult<ExpenseDetails> {
        let amount = Amount::parse(&self.amount)
            .map_err(|_| LedgerError::Validation(INVALID_AMOUNT.into()))?;
        if !amount.is_positive() {
            return Err(LedgerError::Validation(INVALID_AMOUNT.into()));
        }
        if amount > Amount::max_entry() {
            return Err(LedgerError::Validation(AMOUNT_TOO_LARGE.into()));
        }

        // a chosen category is kept verbatim; only a blank one falls back
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        Ok(ExpenseDetails::new(
            self.date.unwrap_or(today),
            category,
            self.description.trim(),
            amount,
        ))
    }
}
