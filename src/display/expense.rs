//! Expense display formatting
//!
//! Formats the expense view as a numbered table for the terminal. Row numbers
//! are 1-based and are how the session refers to a selected row.

use crate::models::{Amount, Expense};

/// Format a list of expenses as a numbered table with a total line
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:10}  {:16}  {:28}  {:>12}\n",
        "#", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(77));
    output.push('\n');

    for (index, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(index + 1, expense));
        output.push('\n');
    }

    let total = Amount::checked_sum(expenses.iter().map(|e| e.amount))
        .map_or_else(|| "overflow".to_string(), |t| t.to_string());
    output.push_str(&"-".repeat(77));
    output.push('\n');
    output.push_str(&format!(
        "{:>62}  {:>12}\n",
        format!("Total ({} expenses):", expenses.len()),
        total
    ));

    output
}

/// Format a single table row
pub fn format_expense_row(row: usize, expense: &Expense) -> String {
    format!(
        "{:>3}  {}  {}  {}  {:>12}",
        row,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 16),
        truncate(&expense.description, 28),
        expense.amount
    )
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category:    {}\n", expense.category));
    if expense.description.is_empty() {
        output.push_str("Description: (none)\n");
    } else {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!("Amount:      {}\n", expense.amount));

    output
}

/// Pad or truncate to exactly `width` characters
fn truncate(s: &str, width: usize) -> String {
    // keep the table on one line per row
    let s = s.replace(['\n', '\r'], " ");
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDetails;
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(ExpenseDetails::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Food & Drinks",
            "Lunch",
            Amount::from_units(1250),
        ))
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(1, &lunch());
        assert!(row.starts_with("  1  2024-05-01"));
        assert!(row.contains("Food & Drinks"));
        assert!(row.ends_with("1250.00"));
    }

    #[test]
    fn test_format_table_with_total() {
        let mut bus = lunch();
        bus.amount = Amount::from_units(980);

        let table = format_expense_table(&[lunch(), bus]);
        assert!(table.contains("Description"));
        assert!(table.contains("Total (2 expenses):"));
        assert!(table.contains("2230.00"));
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let mut huge = lunch();
        huge.amount = Amount::parse("79228162514264337593543950335").unwrap();

        let table = format_expense_table(&[huge.clone(), huge]);
        assert!(table.contains("Total (2 expenses):"));
        assert!(table.contains("overflow"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_expense_table(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_format_details() {
        let mut expense = lunch();
        let details = format_expense_details(&expense);
        assert!(details.contains("Description: Lunch"));
        assert!(details.contains("Amount:      1250.00"));

        expense.description.clear();
        assert!(format_expense_details(&expense).contains("(none)"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Café", 6), "Café  ");
        let long = truncate("Électricité et chauffage central", 10);
        assert_eq!(long.chars().count(), 10);
        assert!(long.ends_with("..."));
        assert_eq!(truncate("two\nlines", 9), "two lines");
    }
}
