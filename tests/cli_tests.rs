use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vibefy_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("vibefy"))
}

fn init_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    vibefy_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();
    temp_dir
}

fn run_json(temp_dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = vibefy_cmd()
        .args(args)
        .arg("--json")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    vibefy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RICE"));
}

#[test]
fn test_version() {
    vibefy_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vibefy"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    vibefy_cmd()
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    vibefy_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".vibefy.toml").exists());
    assert!(temp_dir.path().join(".vibefy").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = init_project();

    vibefy_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_zero_ranking() {
    let temp_dir = TempDir::new().unwrap();

    vibefy_cmd()
        .args(["init", "--ranking", "zero"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".vibefy.toml")).unwrap();
    assert!(config.contains("zero"));
}

// =============================================================================
// Calculators
// =============================================================================

#[test]
fn test_rice_calculator() {
    vibefy_cmd()
        .args(["rice", "8", "3", "80", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("384"));
}

#[test]
fn test_rice_calculator_zero_effort() {
    vibefy_cmd()
        .args(["rice", "8", "3", "80", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_rice_calculator_rejects_non_finite_input() {
    vibefy_cmd()
        .args(["rice", "inf", "1", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reach must be a finite number"));

    vibefy_cmd()
        .args(["rice", "1e200", "1e200", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RICE score must be a finite number"));
}

#[test]
fn test_matrix_calculator_rejects_nan() {
    vibefy_cmd()
        .args(["matrix", "nan", "1", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("value must be a finite number"));
}

#[test]
fn test_matrix_calculator_json() {
    let output = vibefy_cmd()
        .args(["matrix", "9", "9", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let matrix: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(matrix["value"], "critical");
    assert_eq!(matrix["effort"], "xl");
    assert_eq!(matrix["quadrant"], "major_projects");
}

// =============================================================================
// Scoring and ranking
// =============================================================================

#[test]
fn test_score_and_top() {
    let temp_dir = init_project();

    vibefy_cmd()
        .args([
            "score",
            "onboarding",
            "-m",
            "rice",
            "--reach",
            "8",
            "--impact",
            "3",
            "--confidence",
            "80",
            "--effort",
            "5",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scored"))
        .stdout(predicate::str::contains("onboarding"));

    let item = run_json(
        &temp_dir,
        &["score", "sso", "-t", "initiative", "-m", "custom", "--custom", "500"],
    );
    assert_eq!(item["rank"], 1);
    assert_eq!(item["type"], "initiative");

    let top = run_json(&temp_dir, &["top", "-n", "1"]);
    let top = top.as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["id"], "sso");

    let all = run_json(&temp_dir, &["list"]);
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1]["id"], "onboarding");
    assert_eq!(all[1]["score"]["payload"]["score"], 384.0);
}

#[test]
fn test_score_payload_mismatch_is_rejected() {
    let temp_dir = init_project();

    vibefy_cmd()
        .args(["score", "a", "-m", "rice", "--custom", "3"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid payload"));

    let all = run_json(&temp_dir, &["list"]);
    assert!(all.as_array().unwrap().is_empty());
}

#[test]
fn test_score_zero_effort_leaves_session_untouched() {
    let temp_dir = init_project();

    vibefy_cmd()
        .args([
            "score",
            "a",
            "-m",
            "rice",
            "--reach",
            "1",
            "--impact",
            "1",
            "--confidence",
            "1",
            "--effort",
            "0",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));

    assert!(!temp_dir.path().join(".vibefy").join("session.json").exists());
}

#[test]
fn test_rescore_keeps_type() {
    let temp_dir = init_project();

    run_json(&temp_dir, &["score", "bug-1", "-t", "issue", "-m", "custom", "--custom", "1"]);
    let item = run_json(&temp_dir, &["score", "bug-1", "-m", "custom", "--custom", "2"]);
    assert_eq!(item["type"], "issue");
    assert_eq!(item["score"]["payload"], 2.0);
}

// =============================================================================
// Quadrants
// =============================================================================

#[test]
fn test_move_and_quadrant_listing() {
    let temp_dir = init_project();

    run_json(&temp_dir, &["score", "a", "-m", "value-effort", "--value", "2", "--effort", "9"]);
    run_json(&temp_dir, &["score", "b", "-m", "custom", "--custom", "10"]);

    let moved = run_json(&temp_dir, &["move", "b", "quick-wins"]);
    assert_eq!(moved["score"]["method"], "value_effort");
    assert_eq!(moved["score"]["payload"]["quadrant"], "quick_wins");
    assert_eq!(moved["score"]["payload"]["value"], "high");
    assert_eq!(moved["score"]["payload"]["effort"], "s");

    let quick = run_json(&temp_dir, &["quadrant", "quick-wins"]);
    let quick = quick.as_array().unwrap();
    assert_eq!(quick.len(), 1);
    assert_eq!(quick[0]["id"], "b");

    let questionable = run_json(&temp_dir, &["quadrant", "questionable"]);
    assert_eq!(questionable[0]["id"], "a");
}

#[test]
fn test_move_unknown_item_fails() {
    let temp_dir = init_project();

    vibefy_cmd()
        .args(["move", "ghost", "fill-ins"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown item"));
}

// =============================================================================
// Show, remove, import, undo
// =============================================================================

#[test]
fn test_show_item() {
    let temp_dir = init_project();
    run_json(&temp_dir, &["score", "a", "-m", "value-effort", "--value", "9", "--effort", "1"]);

    vibefy_cmd()
        .args(["show", "a"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("quick_wins"))
        .stdout(predicate::str::contains("critical"));
}

#[test]
fn test_remove_reranks() {
    let temp_dir = init_project();
    run_json(&temp_dir, &["score", "a", "-m", "custom", "--custom", "9"]);
    run_json(&temp_dir, &["score", "b", "-m", "custom", "--custom", "1"]);

    vibefy_cmd()
        .args(["remove", "a", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    let b = run_json(&temp_dir, &["show", "b"]);
    assert_eq!(b["rank"], 1);
}

#[test]
fn test_import_batch() {
    let temp_dir = init_project();
    std::fs::write(
        temp_dir.path().join("backlog.json"),
        r#"[
            { "id": "sso", "type": "feature", "method": "rice",
              "reach": 6, "impact": 2, "confidence": 70, "effort": 3 },
            { "id": "crash", "type": "issue", "method": "value_effort", "value": 9, "effort": 2 }
        ]"#,
    )
    .unwrap();

    let result = run_json(&temp_dir, &["import", "backlog.json"]);
    assert_eq!(result["imported"], 2);
    assert_eq!(result["total"], 2);

    let sso = run_json(&temp_dir, &["show", "sso"]);
    assert_eq!(sso["score"]["payload"]["score"], 280.0);
}

#[test]
fn test_undo_restores_previous_score() {
    let temp_dir = init_project();
    run_json(&temp_dir, &["score", "a", "-m", "custom", "--custom", "1"]);
    run_json(&temp_dir, &["move", "a", "major-projects"]);

    vibefy_cmd()
        .arg("undo")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Undone: Move a"));

    let a = run_json(&temp_dir, &["show", "a"]);
    assert_eq!(a["score"]["method"], "custom");

    vibefy_cmd()
        .arg("undo")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let all = run_json(&temp_dir, &["list"]);
    assert!(all.as_array().unwrap().is_empty());

    vibefy_cmd()
        .arg("undo")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo"));
}

#[test]
fn test_undo_failure_is_reported() {
    let temp_dir = init_project();
    run_json(&temp_dir, &["score", "a", "-m", "custom", "--custom", "1"]);

    // the item the undo entry refers to is gone from the session
    std::fs::write(
        temp_dir.path().join(".vibefy").join("session.json"),
        r#"{ "saved_at": "2026-10-16T09:30:00Z", "items": [] }"#,
    )
    .unwrap();

    vibefy_cmd()
        .arg("undo")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to undo"))
        .stderr(predicate::str::contains("Unknown item: a"));

    // the entry stays on the stack after a failed revert
    vibefy_cmd()
        .arg("undo")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Nothing to undo").not());
}
