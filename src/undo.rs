use crate::engine::PrioritizationEngine;
use crate::error::{Result, VibefyError};
use crate::model::ScoredItem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MAX_UNDO_LEVELS: usize = 50;

/// Engine mutations that can be reverted, with what they replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UndoOperation {
    /// Scored an item - undo by removing it, or restoring the old score
    Score {
        id: String,
        previous: Option<ScoredItem>,
    },
    /// Moved an item to a quadrant - undo by restoring the old score
    Move { id: String, previous: ScoredItem },
    /// Removed an item - undo by putting it back where it was
    Remove {
        id: String,
        previous: ScoredItem,
        position: usize,
    },
    /// Imported a batch - undo by restoring the whole previous item set
    Import {
        count: usize,
        previous_items: Vec<ScoredItem>,
    },
}

impl UndoOperation {
    pub fn description(&self) -> String {
        match self {
            UndoOperation::Score { id, .. } => format!("Score {}", id),
            UndoOperation::Move { id, .. } => format!("Move {}", id),
            UndoOperation::Remove { id, .. } => format!("Remove {}", id),
            UndoOperation::Import { count, .. } => format!("Import {} items", count),
        }
    }

    /// Capture the state `id` is in before it gets scored.
    pub fn before_score(engine: &PrioritizationEngine, id: &str) -> Self {
        UndoOperation::Score {
            id: id.to_string(),
            previous: engine.get(id).cloned(),
        }
    }

    pub fn before_move(engine: &PrioritizationEngine, id: &str) -> Result<Self> {
        let previous = engine
            .get(id)
            .cloned()
            .ok_or_else(|| VibefyError::UnknownItem(id.to_string()))?;
        Ok(UndoOperation::Move {
            id: id.to_string(),
            previous,
        })
    }

    pub fn before_remove(engine: &PrioritizationEngine, id: &str) -> Result<Self> {
        let position = engine
            .position(id)
            .ok_or_else(|| VibefyError::UnknownItem(id.to_string()))?;
        Ok(UndoOperation::Remove {
            id: id.to_string(),
            previous: engine.items()[position].clone(),
            position,
        })
    }

    pub fn before_import(engine: &PrioritizationEngine, count: usize) -> Self {
        UndoOperation::Import {
            count,
            previous_items: engine.items().to_vec(),
        }
    }

    /// Revert this operation on `engine`.
    pub fn revert(self, engine: &mut PrioritizationEngine) -> Result<()> {
        match self {
            UndoOperation::Score { id, previous } => match previous {
                Some(item) => engine.restore_item(item, usize::MAX),
                None => engine.remove_item(&id).map(|_| ()),
            },
            UndoOperation::Move { previous, .. } => engine.restore_item(previous, usize::MAX),
            UndoOperation::Remove {
                previous, position, ..
            } => engine.restore_item(previous, position),
            UndoOperation::Import { previous_items, .. } => engine.replace_all(previous_items),
        }
    }
}

/// Persisted undo stack for a project's scoring session
pub struct UndoManager {
    undo_file: PathBuf,
}

impl UndoManager {
    pub fn new(data_path: &Path) -> Self {
        Self {
            undo_file: data_path.join(".undo"),
        }
    }

    /// Record an operation for potential undo, evicting the oldest entry
    /// once the stack is full
    pub fn record(&self, op: UndoOperation) -> Result<()> {
        let mut stack = self.get_stack()?;

        if stack.len() >= MAX_UNDO_LEVELS {
            stack.remove(0);
        }

        stack.push(op);
        self.save_stack(&stack)
    }

    fn get_stack(&self) -> Result<Vec<UndoOperation>> {
        if !self.undo_file.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.undo_file)?;
        let stack: Vec<UndoOperation> = serde_json::from_str(&content)?;
        Ok(stack)
    }

    fn save_stack(&self, stack: &[UndoOperation]) -> Result<()> {
        if let Some(parent) = self.undo_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&stack)?;
        std::fs::write(&self.undo_file, content)?;
        Ok(())
    }

    pub fn last_operation(&self) -> Result<Option<UndoOperation>> {
        let stack = self.get_stack()?;
        Ok(stack.last().cloned())
    }

    pub fn undo_count(&self) -> usize {
        self.get_stack().map(|s| s.len()).unwrap_or(0)
    }

    pub fn undo_stack_descriptions(&self) -> Vec<String> {
        self.get_stack()
            .unwrap_or_default()
            .iter()
            .map(|op| op.description())
            .collect()
    }

    pub fn clear(&self) -> Result<()> {
        if self.undo_file.exists() {
            std::fs::remove_file(&self.undo_file)?;
        }
        Ok(())
    }

    /// Revert the last recorded operation on `engine`.
    ///
    /// The entry is only popped from the stack when the revert succeeds.
    pub fn undo(&self, engine: &mut PrioritizationEngine) -> Result<String> {
        let mut stack = self.get_stack()?;

        let op = stack
            .pop()
            .ok_or_else(|| VibefyError::Storage("Nothing to undo".to_string()))?;

        let description = op.description();
        op.revert(engine)?;

        if stack.is_empty() {
            self.clear()?;
        } else {
            self.save_stack(&stack)?;
        }

        Ok(format!("Undone: {}", description))
    }
}
