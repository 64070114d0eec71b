use crate::engine::RankingStrategy;
use crate::error::{Result, VibefyError};
use crate::model::ItemType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".vibefy.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VibefyConfig {
    #[serde(default)]
    pub vibefy: VibefySettings,

    #[serde(default)]
    pub ranking: RankingSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibefySettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub default_type: ItemType,
}

fn default_path() -> String {
    ".vibefy".to_string()
}

impl Default for VibefySettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            default_type: ItemType::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub value_effort: RankingStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_top_limit() -> usize {
    10
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
        }
    }
}

impl VibefyConfig {
    /// Find the nearest config file at or above `start_path` and load it.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    /// Load a specific config file. The project root is its directory.
    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: VibefyConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| VibefyError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(VibefyError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.vibefy.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
