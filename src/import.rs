//! Batch scoring from upstream records.
//!
//! The data-access side of a project hands over items as flat JSON records:
//!
//! ```json
//! [
//!   { "id": "sso", "type": "feature", "method": "rice",
//!     "reach": 6, "impact": 2, "confidence": 70, "effort": 3 },
//!   { "id": "crash-on-save", "type": "issue", "method": "value_effort",
//!     "value": 9, "effort": 2 },
//!   { "id": "q3-okr", "type": "initiative", "method": "custom", "custom": 42 }
//! ]
//! ```

use crate::engine::PrioritizationEngine;
use crate::error::{Result, VibefyError};
use crate::model::{ItemType, RawScoreFields, ScoringMethod};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: String,

    #[serde(rename = "type", default)]
    pub item_type: ItemType,

    pub method: ScoringMethod,

    #[serde(flatten)]
    pub fields: RawScoreFields,
}

pub fn read_records(path: &Path) -> Result<Vec<ScoreRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

pub fn parse_records(content: &str) -> Result<Vec<ScoreRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Score every record, all or nothing.
///
/// The batch runs against a copy of the engine; the copy replaces the
/// original only when every record scored cleanly. Returns the ids in
/// record order.
pub fn import_records(
    engine: &mut PrioritizationEngine,
    records: &[ScoreRecord],
) -> Result<Vec<String>> {
    let mut staged = engine.clone();
    let mut ids = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let input = record
            .fields
            .into_input(record.method)
            .map_err(|e| at_record(index, &record.id, e))?;
        staged
            .score_item(&record.id, record.item_type, record.method, input)
            .map_err(|e| at_record(index, &record.id, e))?;
        ids.push(record.id.clone());
    }

    tracing::info!(count = ids.len(), "Imported records");
    *engine = staged;
    Ok(ids)
}

fn at_record(index: usize, id: &str, err: VibefyError) -> VibefyError {
    match err {
        VibefyError::InvalidMethodPayload { method, reason } => VibefyError::InvalidMethodPayload {
            method,
            reason: format!("record {} ({}): {}", index + 1, id, reason),
        },
        other => {
            tracing::warn!(record = index + 1, id = %id, error = %other, "Import aborted");
            other
        }
    }
}
