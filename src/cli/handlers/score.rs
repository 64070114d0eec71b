use crate::cli::commands::{ItemTypeArg, MethodArg, ScoreFieldArgs};
use crate::model::{RawScoreFields, ScoringMethod};
use crate::undo::UndoOperation;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::score_summary;

pub fn handle_score(
    ctx: &CommandContext,
    id: String,
    r#type: Option<ItemTypeArg>,
    method: MethodArg,
    fields: ScoreFieldArgs,
    json: bool,
) -> Result<()> {
    let method: ScoringMethod = method.into();
    let payload = RawScoreFields::from(fields).into_input(method)?;

    let mut engine = ctx.load_engine()?;
    let item_type = match r#type {
        Some(t) => t.into(),
        // a rescore without --type keeps the type the item already has
        None => engine
            .get(&id)
            .map(|item| item.item_type)
            .unwrap_or(ctx.config.vibefy.default_type),
    };

    let op = UndoOperation::before_score(&engine, &id);
    let created = !engine.contains(&id);
    let item = engine.score_item(&id, item_type, method, payload)?.clone();
    ctx.commit(&engine, op)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        let verb = if created { "Scored" } else { "Rescored" };
        println!(
            "{} {} {} rank {}",
            verb.green(),
            item.id.cyan(),
            score_summary(&item),
            format!("#{}", item.rank).bold()
        );
    }
    Ok(())
}
