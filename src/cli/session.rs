//! Interactive session
//!
//! Reads one command per line and applies it to a single in-memory ledger.
//! Rows are addressed by their 1-based position in the current filtered view,
//! exactly as printed by `list`. Errors are reported and the session carries on.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::display::{format_expense_details, format_expense_table};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_expenses_csv_to_path;
use crate::models::{category_filter_choices, Expense};
use crate::services::{ExpenseFilter, ExpenseForm};
use crate::storage::LedgerStore;

use super::{AppContext, FilterArgs};

#[derive(Parser, Debug)]
#[command(
    name = "ledger",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Add a new expense
    Add {
        /// Amount (must be positive)
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Category, defaults to "General"
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Edit a row of the current view
    Edit {
        /// Row number as shown by `list`
        row: usize,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete a row of the current view
    #[command(alias = "rm")]
    Delete {
        /// Row number as shown by `list`
        row: usize,
        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one row in detail
    Show {
        /// Row number as shown by `list`
        row: usize,
    },
    /// List the current view
    #[command(alias = "ls")]
    List,
    /// Change filter criteria (unspecified criteria are kept)
    Filter {
        #[command(flatten)]
        criteria: FilterArgs,
        /// Remove the month constraint
        #[arg(long, conflicts_with = "month")]
        any_month: bool,
    },
    /// Clear all filter criteria
    Reset,
    /// Export the current view to CSV
    Export {
        /// Output file (defaults to the export directory)
        output: Option<PathBuf>,
    },
    /// List the category filter choices
    Categories,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// A ledger plus the filter criteria currently applied to it
pub struct Session<'a> {
    ctx: &'a AppContext,
    store: LedgerStore,
    filter: ExpenseFilter,
}

impl<'a> Session<'a> {
    pub fn new(ctx: &'a AppContext, store: LedgerStore) -> Self {
        Self {
            ctx,
            store,
            filter: ExpenseFilter::new(),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn filter(&self) -> &ExpenseFilter {
        &self.filter
    }

    /// The filtered view, recomputed from the store
    pub fn view(&self) -> Vec<Expense> {
        self.filter.apply(&self.store.list())
    }

    /// Process commands until `quit` or end of input
    ///
    /// Only a failure to read from `input` or write to `output` ends the
    /// session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
        prompt: bool,
    ) -> LedgerResult<()> {
        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(output, "ledger> ")?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                writeln!(output, "Error: input line is not valid UTF-8")?;
                continue;
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens = match split_command_line(line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            };

            let command = match SessionLine::try_parse_from(tokens) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(output, "{}", e.render())?;
                    continue;
                }
            };

            debug!(?command, "session command");
            match self.execute(command, output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> LedgerResult<Flow> {
        match command {
            SessionCommand::Add {
                amount,
                date,
                category,
                description,
            } => {
                let form = ExpenseForm {
                    date,
                    category,
                    description: description.unwrap_or_default(),
                    amount,
                };
                let details = form.validate(self.ctx.today)?;
                let id = self.store.add(details);
                writeln!(out, "Added expense {}.", id)?;
            }
            SessionCommand::Edit {
                row,
                amount,
                date,
                category,
                description,
            } => {
                let selected = self.select(row)?;
                let mut form = ExpenseForm::from_details(&selected.details());
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if date.is_some() {
                    form.date = date;
                }
                if category.is_some() {
                    form.category = category;
                }
                if let Some(description) = description {
                    form.description = description;
                }

                let details = form.validate(self.ctx.today)?;
                self.store.update(selected.id, details)?;
                writeln!(out, "Updated expense {}.", selected.id)?;
            }
            SessionCommand::Delete { row, yes } => {
                let selected = self.select(row)?;
                if !yes {
                    writeln!(
                        out,
                        "Delete selected expense? Re-run as `delete {} --yes` to confirm.",
                        row
                    )?;
                    return Ok(Flow::Continue);
                }
                let removed = self.store.remove(selected.id)?;
                writeln!(out, "Deleted expense {}.", removed.id)?;
            }
            SessionCommand::Show { row } => {
                let selected = self.select(row)?;
                write!(out, "{}", format_expense_details(&selected))?;
            }
            SessionCommand::List => {
                write!(out, "{}", format_expense_table(&self.view()))?;
            }
            SessionCommand::Filter {
                criteria,
                any_month,
            } => {
                criteria.merge_into(&mut self.filter);
                if any_month {
                    self.filter.month = None;
                }
                write!(out, "{}", format_expense_table(&self.view()))?;
            }
            SessionCommand::Reset => {
                self.filter.reset();
                write!(out, "{}", format_expense_table(&self.view()))?;
            }
            SessionCommand::Export { output } => {
                let path = output.unwrap_or_else(|| self.ctx.default_export_path());
                let count = export_expenses_csv_to_path(&path, &self.view())?;
                writeln!(out, "Exported {} expenses to: {}", count, path.display())?;
            }
            SessionCommand::Categories => {
                for choice in category_filter_choices(&self.ctx.settings.categories) {
                    writeln!(out, "{}", choice)?;
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// The expense at a 1-based row of the current view
    fn select(&self, row: usize) -> LedgerResult<Expense> {
        let view = self.view();
        row.checked_sub(1)
            .and_then(|index| view.get(index))
            .cloned()
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Please select a row between 1 and {} (got {}).",
                    view.len(),
                    row
                ))
            })
    }
}

/// Split a command line into arguments, honoring single and double quotes
pub fn split_command_line(line: &str) -> LedgerResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(LedgerError::Validation("Unterminated quote".into()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
