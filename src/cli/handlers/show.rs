use crate::error::VibefyError;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_item;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let engine = ctx.load_engine()?;
    let item = engine.get(&id).ok_or(VibefyError::UnknownItem(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        print_item(item);
    }
    Ok(())
}
