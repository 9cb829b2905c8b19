//! Expense categories
//!
//! The ledger stores categories as plain strings. The list below is what the
//! input layer offers; the store itself accepts any text.

/// Suggested categories, in display order
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "General",
    "Food & Drinks",
    "Transport",
    "Groceries",
    "Utilities",
    "Entertainment",
    "Health",
    "Education",
    "Rent",
    "Other",
];

/// Category used when the input layer receives none
pub const DEFAULT_CATEGORY: &str = "General";

/// Category filter value meaning "no constraint"
pub const ALL_CATEGORIES: &str = "All";

/// Choices for a category filter: the "All" sentinel followed by `categories`
pub fn category_filter_choices<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories.iter().map(|c| c.as_ref().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_choices_start_with_all() {
        let choices = category_filter_choices(&DEFAULT_CATEGORIES);
        assert_eq!(choices.len(), DEFAULT_CATEGORIES.len() + 1);
        assert_eq!(choices[0], "All");
        assert_eq!(choices[1], "General");
        assert_eq!(choices.last().map(String::as_str), Some("Other"));
    }

    #[test]
    fn test_default_category_is_listed() {
        assert!(DEFAULT_CATEGORIES.contains(&DEFAULT_CATEGORY));
    }
}
