use crate::cli::commands::QuadrantArg;
use crate::model::Quadrant;
use anyhow::Result;

use super::CommandContext;
use super::utils::{format_quadrant, print_item_list};

pub fn handle_quadrant(ctx: &CommandContext, quadrant: QuadrantArg, json: bool) -> Result<()> {
    let quadrant: Quadrant = quadrant.into();
    let engine = ctx.load_engine()?;
    let items = engine.get_items_by_quadrant(quadrant);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{} ({})\n", format_quadrant(quadrant), items.len());
        print_item_list(&items);
    }
    Ok(())
}
