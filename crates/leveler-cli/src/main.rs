//! Leveler CLI
//!
//! Drives the leveling engine against a SQLite base.
//!
//! # Commands
//!
//! - `init`: create the active table with the configured columns
//! - `add`: insert a record
//! - `select`: set or clear the record selection
//! - `run`: level the selection, or every record when nothing is selected
//! - `record <ID>`: level one record
//! - `show`: print records with their payable, actual and OT net values
//! - `history`: recent batch runs
//!
//! Exit codes: 0 success, 1 runtime or storage error, 2 configuration error.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leveler_core::config::CliOverrides;

mod commands;
mod context;
mod error;
mod notifier;

use context::Context;
use error::CliError;

/// Leveler - step payable toward actual, one unit at a time
#[derive(Parser)]
#[command(name = "leveler-cli")]
#[command(version)]
#[command(about = "Step each record's payable toward its actual, one unit per write")]
#[command(propagate_version = true)]
struct Cli {
    /// Config file to use instead of ./leveler.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path
    #[arg(long, global = true)]
    db: Option<String>,

    /// Active table name
    #[arg(long, global = true)]
    table: Option<String>,

    /// Pause between steps in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Upper bound on steps for one record
    #[arg(long, global = true)]
    hard_cap: Option<u64>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the active table with the configured columns
    Init(commands::init::InitArgs),
    /// Insert a record
    Add(commands::add::AddArgs),
    /// Set or clear the record selection
    Select(commands::select::SelectArgs),
    /// Level the selected records, or all records when nothing is selected
    Run(commands::run::RunArgs),
    /// Level a single record
    Record(commands::record::RecordArgs),
    /// Print records with their payable, actual and OT net values
    Show(commands::show::ShowArgs),
    /// Show recent batch runs
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.verbose {
        0 => leveler_core::tracing::init_tracing(),
        1 => leveler_core::tracing::init_tracing_with_filter("leveler=debug"),
        _ => leveler_core::tracing::init_tracing_with_filter("trace"),
    }

    let exit_code = match dispatch(cli) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(exit_code);
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let overrides = CliOverrides {
        db_path: cli.db,
        table: cli.table,
        step_delay_ms: cli.delay_ms,
        hard_cap: cli.hard_cap,
    };
    let ctx = Context::load(cli.config.as_deref(), &overrides)?;

    match cli.command {
        Commands::Init(args) => commands::init::handle_init(&ctx, args),
        Commands::Add(args) => commands::add::handle_add(&ctx, args),
        Commands::Select(args) => commands::select::handle_select(&ctx, args),
        Commands::Run(args) => commands::run::handle_run(&ctx, args),
        Commands::Record(args) => commands::record::handle_record(&ctx, args),
        Commands::Show(args) => commands::show::handle_show(&ctx, args),
        Commands::History(args) => commands::history::handle_history(&ctx, args),
    }
}
