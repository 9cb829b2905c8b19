//! Expense filtering
//!
//! A stateless projection: given a record sequence and the three criteria
//! (free text, category, month) it returns the records matching all of them,
//! in their original order. Nothing is cached; callers re-run the filter
//! whenever the ledger or the criteria change.

use crate::models::{Expense, Month, ALL_CATEGORIES};

/// Filter criteria for the expense view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive search over description and category
    pub text: String,
    /// Exact, case-sensitive category; `None`, empty or "All" means any
    pub category: Option<String>,
    /// Restrict to a calendar month
    pub month: Option<Month>,
}

impl ExpenseFilter {
    /// Create a filter with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Search text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by month
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Drop every constraint
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the filter lets every record through
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_text().is_empty()
            && self.category_constraint().is_none()
            && self.month.is_none()
    }

    /// Records matching all criteria, in input order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let query = self.normalized_text();
        expenses
            .iter()
            .filter(|e| self.matches(&query, e))
            .cloned()
            .collect()
    }

    fn matches(&self, query: &str, expense: &Expense) -> bool {
        let text_ok = query.is_empty()
            || expense.description.to_lowercase().contains(query)
            || expense.category.to_lowercase().contains(query);

        let category_ok = self
            .category_constraint()
            .map_or(true, |c| expense.category == c);

        let month_ok = self.month.map_or(true, |m| m.contains(expense.date));

        text_ok && category_ok && month_ok
    }

    fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    fn category_constraint(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDetails};
    use crate::storage::LedgerStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        let mut store = LedgerStore::new();
        store.add(ExpenseDetails::new(
            date(2024, 5, 1),
            "Food & Drinks",
            "Lunch",
            Amount::from_units(1250),
        ));
        store.add(ExpenseDetails::new(
            date(2024, 5, 2),
            "Transport",
            "Bus",
            Amount::from_units(980),
        ));
        store.add(ExpenseDetails::new(
            date(2024, 4, 15),
            "Utilities",
            "Bill",
            Amount::from_units(6400),
        ));
        store.list()
    }

    fn descriptions(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.description.as_str()).collect()
    }

    fn all_filters() -> Vec<ExpenseFilter> {
        let texts = ["", "  ", "bus", "BUS", "t", "drinks", "zzz"];
        let categories = [None, Some("All"), Some(""), Some("Transport"), Some("transport")];
        let months = [None, Some(Month::new(2024, 5).unwrap()), Some(Month::new(2024, 4).unwrap())];

        let mut filters = Vec::new();
        for text in texts {
            for category in categories {
                for month in months {
                    filters.push(ExpenseFilter {
                        text: text.to_string(),
                        category: category.map(str::to_string),
                        month,
                    });
                }
            }
        }
        filters
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let expenses = sample();
        let filter = ExpenseFilter::new().category("All");

        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&expenses), expenses);
    }

    #[test]
    fn test_month_filter() {
        let expenses = sample();
        let filter = ExpenseFilter::new().month(Month::new(2024, 5).unwrap());

        assert_eq!(descriptions(&filter.apply(&expenses)), vec!["Lunch", "Bus"]);
    }

    #[test]
    fn test_text_matches_description_case_insensitively() {
        let expenses = sample();
        let filter = ExpenseFilter::new().text("bus");

        assert_eq!(descriptions(&filter.apply(&expenses)), vec!["Bus"]);
    }

    #[test]
    fn test_text_matches_category() {
        let expenses = sample();
        let filter = ExpenseFilter::new().text("UTIL");

        assert_eq!(descriptions(&filter.apply(&expenses)), vec!["Bill"]);
    }

    #[test]
    fn test_whitespace_text_matches_all() {
        let expenses = sample();
        let filter = ExpenseFilter::new().text("   ");

        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&expenses).len(), 3);
    }

    #[test]
    fn test_text_is_trimmed() {
        let expenses = sample();
        let filter = ExpenseFilter::new().text("  lunch ");

        assert_eq!(descriptions(&filter.apply(&expenses)), vec!["Lunch"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let expenses = sample();

        let exact = ExpenseFilter::new().category("Transport");
        assert_eq!(descriptions(&exact.apply(&expenses)), vec!["Bus"]);

        let lower = ExpenseFilter::new().category("transport");
        assert!(lower.apply(&expenses).is_empty());
    }

    #[test]
    fn test_empty_category_means_any() {
        let expenses = sample();
        assert_eq!(ExpenseFilter::new().category("").apply(&expenses).len(), 3);
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let expenses = sample();
        let filter = ExpenseFilter::new()
            .text("l")
            .month(Month::new(2024, 5).unwrap());

        // "Lunch" matches text and month; "Bill" matches text but not month
        assert_eq!(descriptions(&filter.apply(&expenses)), vec!["Lunch"]);
    }

    #[test]
    fn test_empty_fields_do_not_break_matching() {
        let mut store = LedgerStore::new();
        store.add(ExpenseDetails::new(date(2024, 5, 1), "", "", Amount::from_units(1)));
        let expenses = store.list();

        assert_eq!(ExpenseFilter::new().apply(&expenses).len(), 1);
        assert!(ExpenseFilter::new().text("x").apply(&expenses).is_empty());
        assert!(ExpenseFilter::new().category("General").apply(&expenses).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expenses = sample();
        for filter in all_filters() {
            let once = filter.apply(&expenses);
            let twice = filter.apply(&once);
            assert_eq!(once, twice, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_adding_constraints_never_grows_result() {
        let expenses = sample();
        let may = Month::new(2024, 5).unwrap();
        for filter in all_filters() {
            let base = filter.apply(&expenses).len();

            let with_text = filter.clone().text(format!("{}u", filter.text.trim()));
            let with_category = ExpenseFilter {
                category: Some(filter.category.clone().unwrap_or_else(|| "Transport".into())),
                ..filter.clone()
            };
            let with_month = ExpenseFilter {
                month: Some(filter.month.unwrap_or(may)),
                ..filter.clone()
            };

            assert!(with_text.apply(&expenses).len() <= base, "text on {:?}", filter);
            assert!(with_category.apply(&expenses).len() <= base, "category on {:?}", filter);
            assert!(with_month.apply(&expenses).len() <= base, "month on {:?}", filter);
        }
    }

    #[test]
    fn test_reset() {
        let mut filter = ExpenseFilter::new()
            .text("bus")
            .category("Transport")
            .month(Month::new(2024, 5).unwrap());
        assert!(!filter.is_unconstrained());

        filter.reset();
        assert!(filter.is_unconstrained());
    }
}
