use crate::cli::commands::QuadrantArg;
use crate::model::Quadrant;
use crate::undo::UndoOperation;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_quadrant;

pub fn handle_move(
    ctx: &CommandContext,
    id: String,
    quadrant: QuadrantArg,
    json: bool,
) -> Result<()> {
    let quadrant: Quadrant = quadrant.into();
    let mut engine = ctx.load_engine()?;

    let op = UndoOperation::before_move(&engine, &id)?;
    let item = engine.move_item(&id, quadrant)?.clone();
    ctx.commit(&engine, op)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!(
            "{} {} to {} rank {}",
            "Moved".green(),
            item.id.cyan(),
            format_quadrant(quadrant),
            format!("#{}", item.rank).bold()
        );
    }
    Ok(())
}
