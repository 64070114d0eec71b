use super::rice::{RiceScore, compute_rice};
use super::types::{ItemType, Quadrant, ScoringMethod};
use super::value_effort::{ValueEffortMatrix, compute_value_effort_matrix};
use crate::error::{Result, VibefyError};
use serde::{Deserialize, Serialize};

/// The score an item carries. Exactly one payload, tagged by its method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "payload", rename_all = "snake_case")]
pub enum Score {
    Rice(RiceScore),
    ValueEffort(ValueEffortMatrix),
    Custom(f64),
}

impl Score {
    pub fn method(&self) -> ScoringMethod {
        match self {
            Score::Rice(_) => ScoringMethod::Rice,
            Score::ValueEffort(_) => ScoringMethod::ValueEffort,
            Score::Custom(_) => ScoringMethod::Custom,
        }
    }

    pub fn is_consistent(&self) -> bool {
        match self {
            Score::Rice(rice) => rice.is_consistent(),
            Score::ValueEffort(matrix) => matrix.is_consistent(),
            Score::Custom(value) => value.is_finite(),
        }
    }
}

/// Raw caller input for one scoring call, before anything is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreInput {
    Rice {
        reach: f64,
        impact: f64,
        confidence: f64,
        effort: f64,
    },
    ValueEffort {
        value: f64,
        effort: f64,
    },
    Custom(f64),
}

impl ScoreInput {
    pub fn method(&self) -> ScoringMethod {
        match self {
            ScoreInput::Rice { .. } => ScoringMethod::Rice,
            ScoreInput::ValueEffort { .. } => ScoringMethod::ValueEffort,
            ScoreInput::Custom(_) => ScoringMethod::Custom,
        }
    }

    /// Every number in the payload, labelled, for validation.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ScoreInput::Rice {
                reach,
                impact,
                confidence,
                effort,
            } => vec![
                ("reach", reach),
                ("impact", impact),
                ("confidence", confidence),
                ("effort", effort),
            ],
            ScoreInput::ValueEffort { value, effort } => vec![("value", value), ("effort", effort)],
            ScoreInput::Custom(score) => vec![("custom", score)],
        }
    }

    /// Check that this payload belongs to `method`.
    pub fn expect_method(&self, method: ScoringMethod) -> Result<()> {
        if self.method() != method {
            return Err(VibefyError::InvalidMethodPayload {
                method: method.to_string(),
                reason: format!("got a {} payload", self.method()),
            });
        }
        Ok(())
    }

    pub fn compute(&self) -> Result<Score> {
        match *self {
            ScoreInput::Rice {
                reach,
                impact,
                confidence,
                effort,
            } => Ok(Score::Rice(compute_rice(reach, impact, confidence, effort)?)),
            ScoreInput::ValueEffort { value, effort } => Ok(Score::ValueEffort(
                compute_value_effort_matrix(value, effort),
            )),
            ScoreInput::Custom(score) => Ok(Score::Custom(score)),
        }
    }
}

/// Optional numeric fields as they arrive from a form, flag set or import
/// record. Which ones are present must agree with the chosen method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScoreFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<f64>,
}

impl RawScoreFields {
    pub fn into_input(self, method: ScoringMethod) -> Result<ScoreInput> {
        let mut missing = Vec::new();
        let mut unexpected = Vec::new();

        let mut take = |name: &'static str, field: Option<f64>, wanted: bool| -> f64 {
            match (field, wanted) {
                (Some(v), true) => v,
                (None, true) => {
                    missing.push(name);
                    0.0
                }
                (Some(_), false) => {
                    unexpected.push(name);
                    0.0
                }
                (None, false) => 0.0,
            }
        };

        let is_rice = method == ScoringMethod::Rice;
        let is_matrix = method == ScoringMethod::ValueEffort;
        let is_custom = method == ScoringMethod::Custom;

        let reach = take("reach", self.reach, is_rice);
        let impact = take("impact", self.impact, is_rice);
        let confidence = take("confidence", self.confidence, is_rice);
        let effort = take("effort", self.effort, is_rice || is_matrix);
        let value = take("value", self.value, is_matrix);
        let custom = take("custom", self.custom, is_custom);

        if !missing.is_empty() || !unexpected.is_empty() {
            let mut reasons = Vec::new();
            if !missing.is_empty() {
                reasons.push(format!("missing {}", missing.join(", ")));
            }
            if !unexpected.is_empty() {
                reasons.push(format!("unexpected {}", unexpected.join(", ")));
            }
            return Err(VibefyError::InvalidMethodPayload {
                method: method.to_string(),
                reason: reasons.join("; "),
            });
        }

        Ok(match method {
            ScoringMethod::Rice => ScoreInput::Rice {
                reach,
                impact,
                confidence,
                effort,
            },
            ScoringMethod::ValueEffort => ScoreInput::ValueEffort { value, effort },
            ScoringMethod::Custom => ScoreInput::Custom(custom),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub id: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    pub score: Score,

    /// 1-based position in the current ranking. Assigned by the engine.
    #[serde(default)]
    pub rank: usize,
}

impl ScoredItem {
    pub fn new(id: String, item_type: ItemType, score: Score) -> Self {
        Self {
            id,
            item_type,
            score,
            rank: 0,
        }
    }

    pub fn method(&self) -> ScoringMethod {
        self.score.method()
    }

    pub fn rice(&self) -> Option<&RiceScore> {
        match &self.score {
            Score::Rice(rice) => Some(rice),
            _ => None,
        }
    }

    pub fn value_effort(&self) -> Option<&ValueEffortMatrix> {
        match &self.score {
            Score::ValueEffort(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn custom_score(&self) -> Option<f64> {
        match self.score {
            Score::Custom(value) => Some(value),
            _ => None,
        }
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.value_effort().map(|m| m.quadrant)
    }
}
