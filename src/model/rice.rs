use crate::error::{Result, VibefyError};
use serde::{Deserialize, Serialize};

/// Round to two decimals, halves away from zero.
///
/// The scaled value is nudged by a few ulps before rounding so that inputs
/// like `1.005` (stored as `1.00499999...`) still round up.
pub fn round2(value: f64) -> f64 {
    let scaled = value.abs() * 100.0 * (1.0 + 4.0 * f64::EPSILON);
    value.signum() * scaled.round() / 100.0
}

/// A RICE assessment. `score` is always derived from the four inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiceScore {
    pub reach: f64,
    pub impact: f64,
    pub confidence: f64,
    pub effort: f64,
    pub score: f64,
}

impl RiceScore {
    pub fn new(reach: f64, impact: f64, confidence: f64, effort: f64) -> Result<Self> {
        compute_rice(reach, impact, confidence, effort)
    }

    /// True when `score` still matches the inputs it was derived from.
    pub fn is_consistent(&self) -> bool {
        match compute_rice(self.reach, self.impact, self.confidence, self.effort) {
            Ok(fresh) => fresh.score == self.score,
            Err(_) => false,
        }
    }
}

/// `(reach * impact * confidence) / effort`, rounded to two decimals.
///
/// Confidence is taken as its raw number (80, not 0.8). Inputs are not
/// clamped to their usual ranges, but a score that overflows to infinity or
/// NaN is an error rather than a stored value.
pub fn compute_rice(reach: f64, impact: f64, confidence: f64, effort: f64) -> Result<RiceScore> {
    if effort == 0.0 {
        return Err(VibefyError::DivisionByZero);
    }
    let score = round2(reach * impact * confidence / effort);
    crate::validation::validate_finite("RICE score", score)?;
    Ok(RiceScore {
        reach,
        impact,
        confidence,
        effort,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rice_uses_raw_confidence() {
        let rice = compute_rice(8.0, 3.0, 80.0, 5.0).unwrap();
        assert_eq!(rice.score, 384.0);
        assert_eq!(rice.reach, 8.0);
        assert_eq!(rice.impact, 3.0);
        assert_eq!(rice.confidence, 80.0);
        assert_eq!(rice.effort, 5.0);
    }

    #[test]
    fn test_compute_rice_rounds_to_two_decimals() {
        let rice = compute_rice(1.0, 1.0, 10.0, 3.0).unwrap();
        assert_eq!(rice.score, 3.33);

        let rice = compute_rice(2.0, 1.0, 10.0, 3.0).unwrap();
        assert_eq!(rice.score, 6.67);
    }

    #[test]
    fn test_compute_rice_zero_effort_fails() {
        let err = compute_rice(5.0, 2.0, 50.0, 0.0).unwrap_err();
        assert!(matches!(err, VibefyError::DivisionByZero));

        // negative zero compares equal to zero
        assert!(compute_rice(5.0, 2.0, 50.0, -0.0).is_err());
    }

    #[test]
    fn test_compute_rice_out_of_range_inputs_are_kept() {
        let rice = compute_rice(20.0, 5.0, 150.0, 2.0).unwrap();
        assert_eq!(rice.score, 7500.0);
        assert_eq!(rice.reach, 20.0);
    }

    #[test]
    fn test_compute_rice_overflowing_product_fails() {
        let err = compute_rice(1e200, 1e200, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, VibefyError::Validation(_)));
        assert!(err.to_string().contains("RICE score"));
    }

    #[test]
    fn test_compute_rice_infinity_times_zero_fails() {
        // 1e300 * 1e300 is inf, and inf * 0 is NaN
        let err = compute_rice(1e300, 1e300, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, VibefyError::Validation(_)));
    }

    #[test]
    fn test_compute_rice_subnormal_effort_fails() {
        let err = compute_rice(10.0, 3.0, 100.0, 1e-320).unwrap_err();
        assert!(matches!(err, VibefyError::Validation(_)));
    }

    #[test]
    fn test_compute_rice_rounding_overflow_fails() {
        // finite before rounding, but scaling by 100 leaves f64 range
        assert!(compute_rice(1e307, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.124), 0.12);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(384.0), 384.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_is_consistent_detects_tampering() {
        let mut rice = compute_rice(4.0, 2.0, 50.0, 2.0).unwrap();
        assert!(rice.is_consistent());
        rice.score = 1.0;
        assert!(!rice.is_consistent());
    }
}
