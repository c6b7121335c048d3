//! `show`: print every record's payable, actual and OT net values.
//! Selected records are marked with `*`.

use std::collections::HashSet;

use clap::Args;
use leveler_core::traits::TableStore;
use leveler_core::types::RecordId;
use serde_json::{json, Map, Value};

use super::display_cell;
use crate::context::Context;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print every column, not only the three configured ones
    #[arg(long)]
    pub all: bool,

    /// Print records as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn handle_show(ctx: &Context, args: ShowArgs) -> Result<(), CliError> {
    let store = ctx.table()?;
    let columns = &ctx.config.columns;
    let wanted = [
        columns.effective_payable(),
        columns.effective_actual(),
        columns.effective_ot_net(),
    ];
    let selected: HashSet<RecordId> = store
        .selected_records()?
        .unwrap_or_default()
        .into_iter()
        .collect();

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for id in store.list_records()? {
        let cells: Vec<(String, Value)> = store
            .read_row(&id)?
            .into_iter()
            .filter(|(def, _)| args.all || wanted.contains(&def.name.as_str()))
            .map(|(def, value)| (def.name, value))
            .collect();
        if header.is_none() {
            header = Some(cells.iter().map(|(name, _)| name.clone()).collect());
        }
        rows.push((id, cells));
    }

    if args.json {
        let out: Vec<Value> = rows
            .into_iter()
            .map(|(id, cells)| {
                let fields: Map<String, Value> = cells.into_iter().collect();
                let is_selected = selected.contains(&id);
                json!({
                    "id": id,
                    "selected": is_selected,
                    "fields": fields,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let header = header.unwrap_or_else(|| wanted.iter().map(|s| s.to_string()).collect());
    println!("  ID\t{}", header.join("\t"));
    for (id, cells) in &rows {
        let marker = if selected.contains(id) { '*' } else { ' ' };
        let values: Vec<String> = cells.iter().map(|(_, v)| display_cell(v)).collect();
        println!("{marker} {id}\t{}", values.join("\t"));
    }
    Ok(())
}
