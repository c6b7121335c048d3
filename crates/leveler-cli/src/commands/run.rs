//! `run`: level the selection, or every record when nothing is selected.
//! Each run is logged to run_history.

use std::time::Instant;

use clap::Args;
use leveler_core::traits::Notifier;
use leveler_core::types::BatchReport;
use leveler_engine::{BatchRunner, TracingNotifier};
use leveler_storage::now_secs;
use leveler_storage::queries::run_history::{self, RunCompletion};

use crate::context::Context;
use crate::error::CliError;
use crate::notifier::StdoutNotifier;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Print the full report as JSON instead of text; the notice goes to the log
    #[arg(long)]
    pub json: bool,
}

pub fn handle_run(ctx: &Context, args: RunArgs) -> Result<(), CliError> {
    let store = ctx.table()?;
    let db = store.database().clone();
    let run_id = db.with_writer(|conn| {
        run_history::insert_run_start(conn, now_secs(), store.table_name(), "batch")
    })?;

    let notifier: &dyn Notifier = if args.json {
        &TracingNotifier
    } else {
        &StdoutNotifier
    };
    let started = Instant::now();
    let outcome = BatchRunner::new(&store, &ctx.config, notifier).run();
    let duration_ms = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);

    let message = outcome.as_ref().err().map(|e| e.to_string());
    let completion = match &outcome {
        Ok(report) => RunCompletion {
            completed_at: now_secs(),
            total: to_i64(report.total()),
            changed: to_i64(report.changed_count()),
            failed: to_i64(report.failure_count()),
            duration_ms,
            status: "completed",
            error: None,
        },
        Err(_) => RunCompletion {
            completed_at: now_secs(),
            duration_ms,
            status: "failed",
            error: message.as_deref(),
            ..RunCompletion::default()
        },
    };
    db.with_writer(|conn| run_history::update_run_complete(conn, run_id, &completion))?;

    let report = outcome?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_details(&report);
    }
    Ok(())
}

fn print_details(report: &BatchReport) {
    for result in &report.results {
        if let Some(reason) = result.reason {
            println!("  {}  skipped  {reason}", result.record_id);
        } else if let Some(termination) = result.termination {
            println!(
                "  {}  {termination}  steps={}  payable={}",
                result.record_id,
                result.steps,
                result.final_payable.unwrap_or_default()
            );
        }
    }
    for failure in &report.failures {
        println!("  {}  failed  {}", failure.record_id, failure.error);
    }
    let stalled = report.max_loop_count();
    if stalled > 0 {
        println!("  {stalled} record(s) stopped at the step limit");
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
