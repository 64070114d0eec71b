use crate::cli::commands::RankingArg;
use crate::config::{CONFIG_FILE_NAME, RankingSettings, VibefyConfig, VibefySettings};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(path: String, ranking: RankingArg) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let config = VibefyConfig {
        vibefy: VibefySettings {
            path: path.clone(),
            ..Default::default()
        },
        ranking: RankingSettings {
            value_effort: ranking.into(),
        },
        display: Default::default(),
    };

    let data_path = cwd.join(&path);
    std::fs::create_dir_all(&data_path)?;

    config.save(&config_path)?;

    println!(
        "{} vibefy project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
