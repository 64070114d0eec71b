use crate::model::{compute_rice, compute_value_effort_matrix};
use crate::validation::validate_finite;
use anyhow::Result;
use colored::Colorize;

use super::utils::format_quadrant;

pub fn handle_rice(
    reach: f64,
    impact: f64,
    confidence: f64,
    effort: f64,
    json: bool,
) -> Result<()> {
    for (name, value) in [
        ("reach", reach),
        ("impact", impact),
        ("confidence", confidence),
        ("effort", effort),
    ] {
        validate_finite(name, value)?;
    }
    let rice = compute_rice(reach, impact, confidence, effort)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rice)?);
    } else {
        println!(
            "RICE {} = ({} x {} x {}) / {}",
            rice.score.to_string().bold(),
            rice.reach,
            rice.impact,
            rice.confidence,
            rice.effort
        );
    }
    Ok(())
}

pub fn handle_matrix(value: f64, effort: f64, json: bool) -> Result<()> {
    validate_finite("value", value)?;
    validate_finite("effort", effort)?;
    let matrix = compute_value_effort_matrix(value, effort);

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        println!(
            "{} (value {}, effort {})",
            format_quadrant(matrix.quadrant),
            matrix.value,
            matrix.effort
        );
    }
    Ok(())
}
