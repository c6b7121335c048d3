//! `record <ID>`: level exactly one record.

use clap::Args;
use leveler_core::traits::Notifier;
use leveler_core::types::RecordId;
use leveler_engine::{SingleRunner, TracingNotifier};

use crate::context::Context;
use crate::error::CliError;
use crate::notifier::StdoutNotifier;

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Record id
    pub id: String,

    /// Print the result as JSON; the notice goes to the log
    #[arg(long)]
    pub json: bool,
}

pub fn handle_record(ctx: &Context, args: RecordArgs) -> Result<(), CliError> {
    let store = ctx.table()?;
    let id = RecordId::from(args.id);
    let notifier: &dyn Notifier = if args.json {
        &TracingNotifier
    } else {
        &StdoutNotifier
    };
    let result = SingleRunner::new(&store, &ctx.config, notifier).run(&id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
