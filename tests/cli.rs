mod common;

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn level_fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let json = common::write_portrait(dir.path(), [180.0, 150.0], None);
    (dir, json)
}

fn passfoto() -> Command {
    let mut cmd = Command::cargo_bin("passfoto").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("PASSFOTO_MAGICK");
    cmd
}

#[test]
fn runs() {
    passfoto()
        .assert()
        .success()
        .stdout(predicate::str::contains("passfoto 0.1.0"));
}

#[test]
fn outputs_tool_name() {
    let mut cmd = passfoto();
    cmd.arg("-V");
    cmd.assert().success().stdout("passfoto 0.1.0\n");
}

// Plan subcommand tests

#[test]
fn plan_text_reports_layout_and_passes() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Grid:       3 x 1 = 3 image(s)"))
        .stdout(predicate::str::contains("head-to-chin 34.0 mm (OK)"))
        .stdout(predicate::str::contains("Compliance check passed"));
}

#[test]
fn plan_json_output_format() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json).args(["--output", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["plan"]["placements"].as_array().unwrap().len(), 3);
    assert_eq!(value["plan"]["config"]["category"], "adult");
    assert!(value["report"]["issues"].as_array().unwrap().is_empty());
    assert_eq!(value["report"]["head_sizes"][0]["class"], "compliant");
}

#[test]
fn plan_unknown_output_format_fails() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json).args(["--output", "yaml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn plan_invalid_category_fails() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json).args(["--category", "martian"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown photo category 'martian'"));
}

#[test]
fn plan_unknown_unit_fails() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json).args(["--border", "2pt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported length unit 'pt'"));
}

#[test]
fn plan_vertical_eye_line_fails() {
    let dir = TempDir::new().unwrap();
    let json = common::write_portrait(dir.path(), [120.0, 300.0], None);
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Degenerate face geometry"));
}

#[test]
fn plan_tiny_canvas_warns_but_succeeds() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan")
        .arg(&json)
        .args(["--canvas-width", "6cm", "--canvas-height", "40"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NoPlacements"));
}

#[test]
fn plan_oversized_canvas_fails() {
    let (_dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("plan")
        .arg(&json)
        .args(["--canvas-width", "100000000", "--canvas-height", "100000000"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length: canvas must be at most"));
}

#[test]
fn plan_dimension_drift_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let json = common::write_portrait(dir.path(), [180.0, 150.0], Some([600, 800]));
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DimensionDrift"))
        .stderr(predicate::str::contains("600 x 800"));
}

#[test]
fn plan_strict_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    let json = common::write_portrait(dir.path(), [180.0, 150.0], Some([600, 800]));
    let mut cmd = passfoto();
    cmd.arg("plan").arg(&json).arg("--strict");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0 error(s) and 1 warning(s)"));
}

#[test]
fn plan_reads_config_file() {
    let (dir, json) = level_fixture();
    let config = dir.path().join("passfoto.yaml");
    fs::write(&config, "category: child\nresolution: 600\n").unwrap();

    let mut cmd = passfoto();
    cmd.arg("plan")
        .arg(&json)
        .arg("--config")
        .arg(&config)
        .args(["--output", "json", "--resolution", "150"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["plan"]["config"]["category"], "child");
    assert_eq!(value["plan"]["config"]["resolution"], 150.0);
}

#[test]
fn plan_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = passfoto();
    cmd.arg("plan").arg(dir.path().join("missing.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

// Sheet subcommand tests

#[test]
fn sheet_dry_run_prints_magick_command() {
    let (dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("sheet")
        .arg(&json)
        .arg(dir.path().join("sheet.jpg"))
        .arg("--dry-run");
    let output = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(output).unwrap();

    assert!(line.starts_with("convert -size 1772x1181 xc:white"));
    assert_eq!(line.matches("-affine").count(), 3);
    assert_eq!(line.matches("'line ").count(), 48);
    assert!(line.contains("face.bmp"));
    assert!(!line.contains("Head-to-chin"));
}

#[test]
fn sheet_check_overlay_dry_run() {
    let (dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("sheet")
        .arg(&json)
        .arg(dir.path().join("sheet.jpg"))
        .args(["--check", "--dry-run", "--magick", "magick"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("magick -size"))
        .stdout(predicate::str::contains("xc:yellow"))
        .stdout(predicate::str::contains("Head-to-chin: 34.0 mm (OK)"));
}

#[test]
fn sheet_missing_renderer_fails() {
    let (dir, json) = level_fixture();
    let output = dir.path().join("sheet.jpg");
    let mut cmd = passfoto();
    cmd.arg("sheet")
        .arg(&json)
        .arg(&output)
        .args(["--magick", "passfoto-no-such-renderer"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start renderer"));
    assert!(!output.exists());
}

// Check subcommand tests

#[test]
fn check_prints_landmarks_and_draws_points() {
    let (dir, json) = level_fixture();
    let mut cmd = passfoto();
    cmd.arg("check")
        .arg(&json)
        .arg(dir.path().join("check.jpg"))
        .arg("--dry-run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Top:        (150, 40)"))
        .stdout(predicate::str::contains("Chin:       (150, 250)"))
        .stdout(predicate::str::contains("Rotation:   0.000 deg"))
        .stdout(predicate::str::contains("'circle 150.000000,40.000000"));
}
