use assert_cmd::prelude::*;
use rstest::rstest;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_valid_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "[selection]\napparatus = \"rosie\"\n").unwrap();
    path
}

fn run_json(args: &[&str]) -> (i32, Value, String) {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);
    let output = Command::cargo_bin("tcset_cli")
        .unwrap()
        .arg("--config")
        .arg(&cfg)
        .arg("--json")
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let body = if stdout.trim().is_empty() { &stderr } else { &stdout };
    let line = body
        .lines()
        .rev()
        .find(|l| l.trim_start().starts_with('{'))
        .unwrap_or("null");
    let v: Value = serde_json::from_str(line).unwrap();
    (output.status.code().unwrap_or(-1), v, stderr)
}

/// Validate the JSON schema of a successful calculation.
#[rstest]
fn calc_json_schema() {
    let (code, v, _) = run_json(&["calc"]);
    assert_eq!(code, 0);
    assert_eq!(v["apparatus"], "rosie");
    assert_eq!(v["spool"], "second");
    assert_eq!(v["unit"], "in");
    assert_eq!(v["inputs"]["desired_c"], 800.0);
    assert!((v["inputs"]["shield_mm"].as_f64().unwrap() - 0.508).abs() < 1e-9);
    assert!((v["inputs"]["capsule_mm"].as_f64().unwrap() - 7.62).abs() < 1e-9);
    assert!((v["shield_correction_c"].as_f64().unwrap() - 35.145_065_6).abs() < 1e-6);
    assert_eq!(v["deviation_c"], 6.7);
    assert!((v["setpoint_c"].as_f64().unwrap() - 758.154_934_4).abs() < 1e-6);
    assert_eq!(v["display"]["setpoint"], "758");
    assert_eq!(v["display"]["shield"], "\u{2212}35.1 \u{00B0}C");
    assert_eq!(v["display"]["deviation"], "\u{2212}6.7 \u{00B0}C");
}

#[rstest]
#[case(&["calc", "--strict", "--temp", "hot"], 3, "InvalidNumber", "desired")]
#[case(&["calc", "--strict", "--shield", "-1"], 4, "NegativeMeasurement", "shield")]
fn error_json_schema(
    #[case] args: &[&str],
    #[case] exit: i32,
    #[case] reason: &str,
    #[case] field: &str,
) {
    let (code, v, _) = run_json(args);
    assert_eq!(code, exit);
    assert_eq!(v["reason"], reason);
    assert_eq!(v["details"]["field"], field);
    assert!(v["message"].as_str().unwrap().contains("How to fix"));
}

#[rstest]
fn lookup_json_interpolates_and_flags_clamping() {
    let (code, v, _) = run_json(&["lookup", "--table", "second", "835.55"]);
    assert_eq!(code, 0);
    assert_eq!(v["table"], "second");
    assert!((v["y"].as_f64().unwrap() - 6.95).abs() < 1e-9);
    assert_eq!(v["clamped"], false);

    let (_, v, _) = run_json(&["lookup", "--table", "second", "10"]);
    assert_eq!(v["y"], 3.2);
    assert_eq!(v["clamped"], true);
}

#[rstest]
fn table_json_keeps_raw_samples() {
    let (code, v, _) = run_json(&["table", "--table", "taylor", "--format", "json"]);
    assert_eq!(code, 0);
    assert_eq!(v["table"], "taylor");
    assert_eq!(v["rows"].as_array().unwrap().len(), 73);
    assert_eq!(v["columns"][0], "Position (mm)");
}

#[rstest]
fn convert_json_reports_both_units() {
    let (code, v, _) = run_json(&["convert", "0.3", "--from", "in"]);
    assert_eq!(code, 0);
    assert_eq!(v["from"]["unit"], "in");
    assert_eq!(v["to"]["unit"], "mm");
    assert_eq!(v["display"], "7.62");
}
