//! CLI command for CSV export

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::export::export_expenses_csv_to_path;

use super::{AppContext, FilterArgs};

/// Export the filtered view of a freshly seeded ledger
pub fn handle_export(
    ctx: &AppContext,
    output: Option<PathBuf>,
    args: &FilterArgs,
) -> LedgerResult<()> {
    let store = ctx.initial_store();
    let view = args.to_filter().apply(&store.list());
    let output = output.unwrap_or_else(|| ctx.default_export_path());

    let count = export_expenses_csv_to_path(&output, &view)?;
    println!("Exported {} expenses to: {}", count, output.display());
    Ok(())
}
