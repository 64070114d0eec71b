use anyhow::Result;

use super::CommandContext;
use super::utils::print_item_list;

pub fn handle_top(ctx: &CommandContext, limit: Option<usize>, json: bool) -> Result<()> {
    let engine = ctx.load_engine()?;
    let limit = limit.unwrap_or(ctx.config.display.top_limit);
    let items = engine.get_top_items(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_item_list(&items);
    }
    Ok(())
}
