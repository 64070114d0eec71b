//! Data models for prioritization.
//!
//! This module defines the scoring value objects and the scored item:
//!
//! - [`RiceScore`]: reach, impact, confidence and effort with the derived score
//! - [`ValueEffortMatrix`]: value/effort bands and the resulting [`Quadrant`]
//! - [`Score`]: the payload an item carries, one variant per [`ScoringMethod`]
//! - [`ScoredItem`]: an item with its score and current rank

mod item;
mod rice;
mod types;
mod value_effort;

pub use item::{RawScoreFields, Score, ScoreInput, ScoredItem};
pub use rice::{RiceScore, compute_rice, round2};
pub use types::{EffortLevel, ItemType, Quadrant, ScoringMethod, ValueLevel};
pub use value_effort::{ValueEffortMatrix, compute_value_effort_matrix};
