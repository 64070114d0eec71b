use crate::undo::UndoOperation;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;

pub fn handle_remove(ctx: &CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let mut engine = ctx.load_engine()?;
    let op = UndoOperation::before_remove(&engine, &id)?;

    if !force && !json {
        print!("Remove {} from the session? [y/N] ", id.cyan());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = engine.remove_item(&id)?;
    ctx.commit(&engine, op)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "removed",
                "id": removed.id,
                "remaining": engine.len()
            }))?
        );
    } else {
        println!("{} {}", "Removed".red(), removed.id.cyan());
    }
    Ok(())
}
