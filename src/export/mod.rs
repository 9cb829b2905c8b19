//! Export module for the expense ledger
//!
//! Provides CSV export of any expense sequence, normally the filtered view.

pub mod csv;

pub use self::csv::{
    default_export_file_name, export_expenses_csv, export_expenses_csv_to_path, CSV_HEADER,
};
