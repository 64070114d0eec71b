mod calc;
mod import;
mod init;
mod list;
mod mv;
mod quadrant;
mod remove;
mod score;
mod show;
mod top;
mod undo;
mod utils;

pub use calc::{handle_matrix, handle_rice};
pub use import::handle_import;
pub use init::handle_init;
pub use list::{ListParams, handle_list};
pub use mv::handle_move;
pub use quadrant::handle_quadrant;
pub use remove::handle_remove;
pub use score::handle_score;
pub use show::handle_show;
pub use top::handle_top;
pub use undo::handle_undo;

use crate::config::VibefyConfig;
use crate::engine::PrioritizationEngine;
use crate::storage::SessionStore;
use crate::undo::{UndoManager, UndoOperation};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: VibefyConfig,
    pub root: PathBuf,
    pub store: SessionStore,
    pub undo: UndoManager,
}

impl CommandContext {
    pub fn new(config: VibefyConfig, root: PathBuf) -> Self {
        let store = SessionStore::new(&config, &root);
        let undo = UndoManager::new(&config.data_path(&root));
        Self {
            config,
            root,
            store,
            undo,
        }
    }

    pub fn load_engine(&self) -> Result<PrioritizationEngine> {
        self.store.load().with_context(|| {
            format!(
                "Failed to load session from {}",
                self.store.session_file().display()
            )
        })
    }

    /// Persist a mutated engine, then remember how to revert the change.
    pub fn commit(&self, engine: &PrioritizationEngine, op: UndoOperation) -> Result<()> {
        self.store.save(engine).context("Failed to save session")?;
        if let Err(e) = self.undo.record(op) {
            tracing::warn!(error = %e, "Failed to record undo operation");
        }
        Ok(())
    }
}
