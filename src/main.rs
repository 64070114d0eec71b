use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use vibefy::cli::handlers::{self, CommandContext, ListParams};
use vibefy::cli::{Cli, Commands};
use vibefy::config::VibefyConfig;
use vibefy::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    let config_override = cli.config.as_deref();
    let ctx = || load_context(config_override);

    match cli.command {
        Commands::Init { path, ranking } => handlers::handle_init(path, ranking),
        Commands::Score {
            id,
            r#type,
            method,
            fields,
            json,
        } => handlers::handle_score(&ctx()?, id, r#type, method, fields, json),
        Commands::Rice {
            reach,
            impact,
            confidence,
            effort,
            json,
        } => handlers::handle_rice(reach, impact, confidence, effort, json),
        Commands::Matrix {
            value,
            effort,
            json,
        } => handlers::handle_matrix(value, effort, json),
        Commands::Move { id, quadrant, json } => {
            handlers::handle_move(&ctx()?, id, quadrant, json)
        }
        Commands::Top { limit, json } => handlers::handle_top(&ctx()?, limit, json),
        Commands::Quadrant { quadrant, json } => {
            handlers::handle_quadrant(&ctx()?, quadrant, json)
        }
        Commands::List {
            r#type,
            method,
            json,
        } => handlers::handle_list(
            &ctx()?,
            ListParams {
                r#type,
                method,
                json,
            },
        ),
        Commands::Show { id, json } => handlers::handle_show(&ctx()?, id, json),
        Commands::Remove { id, force, json } => {
            handlers::handle_remove(&ctx()?, id, force, json)
        }
        Commands::Import { file, json } => handlers::handle_import(&ctx()?, file, json),
        Commands::Undo { json } => handlers::handle_undo(&ctx()?, json),
    }
}

fn load_context(config_override: Option<&str>) -> Result<CommandContext> {
    let (config, root) = match config_override {
        Some(path) => VibefyConfig::load_from(Path::new(path)),
        None => {
            let cwd = std::env::current_dir()?;
            VibefyConfig::load(&cwd)
        }
    }
    .context("Failed to load vibefy configuration")?;
    Ok(CommandContext::new(config, root))
}
