//! `history`: recent batch runs, newest first.

use chrono::{TimeZone, Utc};
use clap::Args;
use leveler_storage::queries::run_history;

use crate::context::Context;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of runs to show
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

pub fn handle_history(ctx: &Context, args: HistoryArgs) -> Result<(), CliError> {
    let db = ctx.database()?;
    let (runs, recorded) = db.with_reader(|conn| {
        Ok((
            run_history::query_recent(conn, args.limit)?,
            run_history::count(conn)?,
        ))
    })?;
    if runs.is_empty() {
        println!("No runs recorded");
        return Ok(());
    }

    let shown = runs.len();
    for run in runs {
        let started = Utc
            .timestamp_opt(run.started_at, 0)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| run.started_at.to_string());
        let figures = match (run.total, run.changed, run.failed) {
            (Some(total), Some(changed), Some(failed)) => {
                format!("changed={changed}/{total} failed={failed}")
            }
            _ => "-".to_string(),
        };
        let duration = run
            .duration_ms
            .map(|ms| format!("{ms}ms"))
            .unwrap_or_else(|| "-".to_string());
        print!(
            "#{}  {started}  {}  {}  {}  {figures}  {duration}",
            run.id, run.table_name, run.mode, run.status
        );
        match run.error {
            Some(error) => println!("  {error}"),
            None => println!(),
        }
    }
    println!("Showing {shown} of {recorded} run(s)");
    Ok(())
}
