//! `select`: replace or clear the active table's selection.

use clap::Args;
use leveler_core::types::RecordId;

use crate::context::Context;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Record ids to select, in order
    #[arg(value_name = "ID", required_unless_present = "clear")]
    pub ids: Vec<String>,

    /// Clear the selection instead
    #[arg(long, conflicts_with = "ids")]
    pub clear: bool,
}

pub fn handle_select(ctx: &Context, args: SelectArgs) -> Result<(), CliError> {
    let store = ctx.table()?;
    if args.clear {
        store.clear_selection()?;
        println!("Selection cleared");
        return Ok(());
    }
    let ids: Vec<RecordId> = args.ids.into_iter().map(RecordId::from).collect();
    store.set_selection(&ids)?;
    println!("Selected {} record(s)", ids.len());
    Ok(())
}
