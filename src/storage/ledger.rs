//! In-memory ledger store
//!
//! Owns the ordered collection of expense records and is the single source of
//! truth for them. Nothing here validates field values; that is the input
//! layer's job (see `services::validation`).

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense, ExpenseDetails, ExpenseId};

/// Ordered, in-memory collection of expenses
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    expenses: Vec<Expense>,
}

impl LedgerStore {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with three sample expenses dated relative to `today`
    pub fn with_sample_data(today: NaiveDate) -> Self {
        let mut store = Self::new();
        store.add(ExpenseDetails::new(
            today,
            "Food & Drinks",
            "Lunch",
            Amount::from_units(1250),
        ));
        store.add(ExpenseDetails::new(
            today - Duration::days(1),
            "Transport",
            "Bus + Tuk",
            Amount::from_units(980),
        ));
        store.add(ExpenseDetails::new(
            today - Duration::days(2),
            "Utilities",
            "Electricity Bill",
            Amount::from_units(6400),
        ));
        store
    }

    /// Append a new expense and return its freshly assigned ID
    pub fn add(&mut self, details: ExpenseDetails) -> ExpenseId {
        let expense = Expense::new(details);
        let id = expense.id;
        debug!(%id, date = %expense.date, category = %expense.category, "expense added");
        self.expenses.push(expense);
        id
    }

    /// Overwrite every field of an existing expense in place
    pub fn update(&mut self, id: ExpenseId, details: ExpenseDetails) -> LedgerResult<()> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        expense.apply(details);
        debug!(%id, "expense updated");
        Ok(())
    }

    /// Delete an expense, returning the removed record
    pub fn remove(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        debug!(%id, "expense removed");
        Ok(removed)
    }

    /// Snapshot of all expenses in insertion order
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Look up a single expense
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn details(description: &str, units: i64) -> ExpenseDetails {
        ExpenseDetails::new(date(2024, 5, 1), "General", description, Amount::from_units(units))
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = LedgerStore::new();
        let a = store.add(details("first", 1));
        let b = store.add(details("second", 2));

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, a);
        assert_eq!(list[1].id, b);
        assert_eq!(list[1].description, "second");
    }

    #[test]
    fn test_update_overwrites_fields_and_keeps_id() {
        let mut store = LedgerStore::new();
        let id = store.add(details("Bus", 980));

        let new_details =
            ExpenseDetails::new(date(2024, 6, 3), "Transport", "Train", Amount::from_cents(4550));
        store.update(id, new_details.clone()).unwrap();

        let updated = store.get(id).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.details(), new_details);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let mut store = LedgerStore::with_sample_data(date(2024, 5, 3));
        let before = store.list();

        let err = store.update(ExpenseId::new(), details("ghost", 1)).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_returns_record() {
        let mut store = LedgerStore::new();
        let keep = store.add(details("keep", 1));
        let drop = store.add(details("drop", 2));

        let removed = store.remove(drop).unwrap();

        assert_eq!(removed.description, "drop");
        assert_eq!(store.len(), 1);
        assert!(store.get(drop).is_none());
        assert!(store.get(keep).is_some());
    }

    #[test]
    fn test_remove_missing_id_leaves_store_unchanged() {
        let mut store = LedgerStore::with_sample_data(date(2024, 5, 3));
        let before = store.list();

        let err = store.remove(ExpenseId::new()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_twice_fails_second_time() {
        let mut store = LedgerStore::new();
        let id = store.add(details("once", 1));
        store.remove(id).unwrap();
        assert!(store.remove(id).unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique_and_count_tracks_operations() {
        let mut store = LedgerStore::new();
        let mut ids = Vec::new();
        let mut removed = 0;

        for i in 0..30 {
            let id = store.add(details("item", i + 1));
            ids.push(id);
            if i % 3 == 0 {
                store.update(id, details("edited", 7)).unwrap();
            }
            if i % 4 == 3 {
                store.remove(ids[ids.len() - 2]).unwrap();
                removed += 1;
            }
        }

        // a stale id does not change the count
        let stale = ids[2];
        assert!(store.remove(stale).unwrap_err().is_not_found());

        let list = store.list();
        let unique: HashSet<_> = list.iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), list.len());
        assert_eq!(list.len(), 30 - removed);
    }

    #[test]
    fn test_sample_data() {
        let today = date(2024, 5, 3);
        let store = LedgerStore::with_sample_data(today);
        let list = store.list();

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].date, today);
        assert_eq!(list[0].description, "Lunch");
        assert_eq!(list[1].date, date(2024, 5, 2));
        assert_eq!(list[1].category, "Transport");
        assert_eq!(list[2].date, date(2024, 5, 1));
        assert_eq!(list[2].amount, Amount::from_units(6400));
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let mut store = LedgerStore::new();
        store.add(details("before", 1));
        let snapshot = store.list();
        store.add(details("after", 2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
