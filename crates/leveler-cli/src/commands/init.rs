//! `init`: create the active table with the three configured columns.

use clap::Args;
use leveler_core::constants::PROJECT_CONFIG_FILE;
use leveler_storage::SqliteTableStore;
use tracing::info;

use crate::context::Context;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Extra columns to create after the configured ones
    #[arg(long = "extra", value_name = "NAME")]
    pub extra: Vec<String>,

    /// Also write the resolved configuration to ./leveler.toml if it is absent
    #[arg(long)]
    pub write_config: bool,
}

pub fn handle_init(ctx: &Context, args: InitArgs) -> Result<(), CliError> {
    let columns = &ctx.config.columns;
    let mut names: Vec<&str> = vec![
        columns.effective_payable(),
        columns.effective_actual(),
        columns.effective_ot_net(),
    ];
    for extra in &args.extra {
        if names.contains(&extra.as_str()) {
            return Err(CliError::InvalidInput(format!(
                "column '{extra}' is listed twice"
            )));
        }
        names.push(extra);
    }

    let store = SqliteTableStore::create(ctx.database()?, ctx.table_name(), &names)?;
    info!(table = store.table_name(), "initialized");
    println!(
        "Created table '{}' with columns: {}",
        store.table_name(),
        names.join(", ")
    );

    if args.write_config {
        let path = std::env::current_dir()?.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            println!("{} already exists; left unchanged", path.display());
        } else {
            std::fs::write(&path, ctx.config.to_toml()?)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
