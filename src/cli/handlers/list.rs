use crate::cli::commands::{ItemTypeArg, MethodArg};
use crate::model::{ItemType, ScoringMethod};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_item_list;

/// Parameters for list operation
pub struct ListParams {
    pub r#type: Option<ItemTypeArg>,
    pub method: Option<MethodArg>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let engine = ctx.load_engine()?;
    let mut items = engine.ranked();

    if let Some(t) = params.r#type {
        let filter_type: ItemType = t.into();
        items.retain(|item| item.item_type == filter_type);
    }
    if let Some(m) = params.method {
        let filter_method: ScoringMethod = m.into();
        items.retain(|item| item.method() == filter_method);
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_item_list(&items);
    }
    Ok(())
}
