//! One-shot listing commands

use crate::display::format_expense_table;
use crate::error::LedgerResult;
use crate::models::category_filter_choices;
use tracing::info;

use super::{AppContext, FilterArgs};

/// Print the filtered view of a freshly seeded ledger
pub fn handle_list(ctx: &AppContext, args: &FilterArgs) -> LedgerResult<()> {
    let store = ctx.initial_store();
    let view = args.to_filter().apply(&store.list());

    print!("{}", format_expense_table(&view));
    Ok(())
}

/// Print the category filter choices
pub fn handle_categories(ctx: &AppContext) -> LedgerResult<()> {
    for choice in category_filter_choices(&ctx.settings.categories) {
        println!("{}", choice);
    }
    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config(ctx: &AppContext, init: bool) -> LedgerResult<()> {
    let settings_file = ctx.paths.settings_file();
    if init {
        if settings_file.exists() {
            println!("Settings file already exists: {}", settings_file.display());
        } else {
            ctx.settings.save(&ctx.paths)?;
            info!(path = %settings_file.display(), "settings written");
            println!("Wrote default settings to: {}", settings_file.display());
        }
        println!();
    }

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory:   {}", ctx.paths.base_dir().display());
    println!("Settings file:    {}", settings_file.display());
    println!(
        "Export directory: {}",
        ctx.settings.export_dir(&ctx.paths).display()
    );
    println!();
    println!("Settings:");
    println!("  Seed sample data: {}", ctx.settings.seed_sample_data);
    println!("  Categories:       {}", ctx.settings.categories.join(", "));
    Ok(())
}
