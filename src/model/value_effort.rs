use super::types::{EffortLevel, Quadrant, ValueLevel};
use serde::{Deserialize, Serialize};

/// A value/effort assessment and the quadrant it falls into.
///
/// The raw inputs are kept next to the derived bands so the matrix can be
/// re-derived and compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueEffortMatrix {
    pub value: ValueLevel,
    pub effort: EffortLevel,
    pub quadrant: Quadrant,
    pub value_input: f64,
    pub effort_input: f64,
}

impl ValueEffortMatrix {
    pub fn is_consistent(&self) -> bool {
        compute_value_effort_matrix(self.value_input, self.effort_input) == *self
    }

    /// Value per unit of effort, for mixing with RICE and custom scores in
    /// one ranking. Effort below 1 counts as 1.
    pub fn ratio(&self) -> f64 {
        super::rice::round2(self.value_input / self.effort_input.max(1.0))
    }
}

pub fn compute_value_effort_matrix(value: f64, effort: f64) -> ValueEffortMatrix {
    let value_level = ValueLevel::from_score(value);
    let effort_level = EffortLevel::from_score(effort);
    ValueEffortMatrix {
        value: value_level,
        effort: effort_level,
        quadrant: Quadrant::classify(value_level, effort_level),
        value_input: value,
        effort_input: effort,
    }
}
