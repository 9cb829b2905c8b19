use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_categories, handle_config, handle_export, handle_list, AppContext, FilterArgs, Session,
};
use expense_ledger::config::{LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense ledger with filtering and CSV export",
    long_about = "Expense Ledger keeps a list of personal expenses in memory, \
                  lets you filter them by text, category and month, and exports \
                  the filtered view to CSV. Nothing is saved between runs."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List expenses matching the filter
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Export expenses matching the filter to CSV
    Export {
        /// Output file (defaults to expenses_YYYYMMDD.csv in the export directory)
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the category filter choices
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current (default) settings to the settings file if it is missing
        #[arg(long)]
        init: bool,
    },

    /// Start an interactive session reading commands from stdin
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(level_for(cli.verbose));

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();
    debug!(base_dir = %paths.base_dir().display(), %today, "starting");

    let ctx = AppContext::new(paths, settings, today);

    match cli.command {
        Some(Commands::List(filter)) => handle_list(&ctx, &filter)?,
        Some(Commands::Export { output, filter }) => handle_export(&ctx, output, &filter)?,
        Some(Commands::Categories) => handle_categories(&ctx)?,
        Some(Commands::Config { init }) => handle_config(&ctx, init)?,
        Some(Commands::Session) => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("Expense Ledger session. Type 'help' for commands, 'quit' to leave.");
            }
            let mut session = Session::new(&ctx, ctx.initial_store());
            session.run(stdin.lock(), &mut std::io::stdout().lock(), interactive)?;
        }
        None => {
            println!("Expense Ledger - personal expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger session' to add, edit and delete expenses interactively.");
        }
    }

    Ok(())
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate logs, at the requested level.
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            "expense_ledger",
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
