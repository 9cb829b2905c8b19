//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger store, filter and exporter.

pub mod expense;
pub mod export;
pub mod session;

pub use expense::{handle_categories, handle_config, handle_list};
pub use export::handle_export;
pub use session::{split_command_line, Session};

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::{LedgerPaths, Settings};
use crate::export::default_export_file_name;
use crate::models::Month;
use crate::services::ExpenseFilter;
use crate::storage::LedgerStore;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: LedgerPaths,
    pub settings: Settings,
    /// Used for default dates, sample data and export file names
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new(paths: LedgerPaths, settings: Settings, today: NaiveDate) -> Self {
        Self {
            paths,
            settings,
            today,
        }
    }

    /// The ledger every invocation starts from
    pub fn initial_store(&self) -> LedgerStore {
        if self.settings.seed_sample_data {
            LedgerStore::with_sample_data(self.today)
        } else {
            LedgerStore::new()
        }
    }

    /// Export destination used when none is given
    pub fn default_export_path(&self) -> PathBuf {
        self.settings
            .export_dir(&self.paths)
            .join(default_export_file_name(self.today))
    }
}

/// Filter criteria shared by `list`, `export` and the session `filter` command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to find in description or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category name ("All" for any)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<Month>,
}

impl FilterArgs {
    /// Build a fresh filter from these arguments
    pub fn to_filter(&self) -> ExpenseFilter {
        let mut filter = ExpenseFilter::new();
        self.merge_into(&mut filter);
        filter
    }

    /// Replace only the criteria that were given
    pub fn merge_into(&self, filter: &mut ExpenseFilter) {
        if let Some(search) = &self.search {
            filter.text = search.clone();
        }
        if let Some(category) = &self.category {
            filter.category = Some(category.clone());
        }
        if let Some(month) = self.month {
            filter.month = Some(month);
        }
    }
}
