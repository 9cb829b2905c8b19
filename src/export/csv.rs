//! CSV Export functionality
//!
//! Writes a sequence of expenses (normally the filtered view) as CSV with the
//! fixed schema `Date,Category,Description,Amount`.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::storage::write_atomic;

/// Header line of every export
pub const CSV_HEADER: &str = "Date,Category,Description,Amount";

/// Write expenses as CSV, in the order given
///
/// Category and description are always quoted; dates are `YYYY-MM-DD` and
/// amounts carry exactly two decimals.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(export_error)?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{}",
            expense.date.format("%Y-%m-%d"),
            quote_csv(&expense.category),
            quote_csv(&expense.description),
            expense.amount.to_fixed_2()
        )
        .map_err(export_error)?;
    }

    writer.flush().map_err(export_error)?;
    debug!(rows = expenses.len(), "csv written");
    Ok(())
}

/// Export expenses to a file
///
/// The file only appears at `path` once it has been written completely.
/// Returns the number of exported rows.
pub fn export_expenses_csv_to_path<P: AsRef<Path>>(
    path: P,
    expenses: &[Expense],
) -> LedgerResult<usize> {
    let path = path.as_ref();
    write_atomic(path, |writer| export_expenses_csv(expenses, writer))?;
    info!(rows = expenses.len(), path = %path.display(), "expenses exported");
    Ok(expenses.len())
}

/// Suggested export file name for a given day, e.g. `expenses_20240501.csv`
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date.format("%Y%m%d"))
}

/// Quote a field, doubling embedded quotes
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn export_error(e: std::io::Error) -> LedgerError {
    LedgerError::Io(format!("Failed to write export: {}", e))
}
