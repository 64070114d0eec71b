use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_undo(ctx: &CommandContext, json: bool) -> Result<()> {
    // An empty stack is not a failure; a revert that cannot apply is.
    if ctx.undo.last_operation()?.is_none() {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "success": false,
                    "error": "Nothing to undo"
                }))?
            );
        } else {
            println!("Nothing to undo");
        }
        return Ok(());
    }

    let mut engine = ctx.load_engine()?;
    let msg = ctx
        .undo
        .undo(&mut engine)
        .context("Failed to undo the last operation")?;
    ctx.store.save(&engine)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "success": true,
                "message": msg
            }))?
        );
    } else {
        println!("{}", msg);
    }
    Ok(())
}
