use crate::import::{import_records, read_records};
use crate::undo::UndoOperation;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::CommandContext;

pub fn handle_import(ctx: &CommandContext, file: String, json: bool) -> Result<()> {
    let records = read_records(Path::new(&file))
        .with_context(|| format!("Failed to read score records from {}", file))?;

    let mut engine = ctx.load_engine()?;
    let op = UndoOperation::before_import(&engine, records.len());
    let ids = import_records(&mut engine, &records)?;
    ctx.commit(&engine, op)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "imported": ids.len(),
                "ids": ids,
                "total": engine.len()
            }))?
        );
    } else {
        println!(
            "{} {} items from {} ({} in session)",
            "Imported".green(),
            ids.len(),
            file,
            engine.len()
        );
    }
    Ok(())
}
