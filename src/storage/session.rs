use crate::{
    config::VibefyConfig,
    engine::{PrioritizationEngine, RankingStrategy},
    error::{Result, VibefyError},
    model::ScoredItem,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const SESSION_FILE_NAME: &str = "session.json";

/// What gets written to disk: the items, without trusting their ranks on
/// the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<ScoredItem>,
}

pub struct SessionStore {
    data_path: PathBuf,
    session_file: PathBuf,
    strategy: RankingStrategy,
}

impl SessionStore {
    pub fn new(config: &VibefyConfig, project_root: &Path) -> Self {
        let data_path = config.data_path(project_root);
        Self {
            session_file: data_path.join(SESSION_FILE_NAME),
            data_path,
            strategy: config.ranking.value_effort,
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    /// Load the saved session, or an empty engine when nothing is saved yet.
    pub fn load(&self) -> Result<PrioritizationEngine> {
        if !self.session_file.exists() {
            return Ok(PrioritizationEngine::new(self.strategy));
        }

        let content = std::fs::read_to_string(&self.session_file)?;
        let snapshot: SessionSnapshot = serde_json::from_str(&content)?;
        tracing::info!(
            items = snapshot.items.len(),
            saved_at = %snapshot.saved_at,
            "Loading session"
        );
        PrioritizationEngine::from_items(snapshot.items, self.strategy)
    }

    pub fn save(&self, engine: &PrioritizationEngine) -> Result<()> {
        tracing::info!(items = engine.len(), "Saving session");

        std::fs::create_dir_all(&self.data_path)?;
        let snapshot = SessionSnapshot {
            saved_at: Utc::now(),
            items: engine.items().to_vec(),
        };
        let content = serde_json::to_string_pretty(&snapshot)?;
        atomic_write(&self.session_file, &content)
    }
}

/// Write through a temp file in the same directory, then rename over the
/// target, so readers never see a half-written session.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path.parent().ok_or_else(|| {
        VibefyError::Storage("Target path has no parent directory".to_string())
    })?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| VibefyError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| VibefyError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| VibefyError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(target_path)
        .map_err(|e| VibefyError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
