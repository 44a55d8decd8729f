//! Runs the `twinrange` binary end to end.

use std::io::Write;
use std::process::Command;

fn twinrange() -> Command {
    Command::new(env!("CARGO_BIN_EXE_twinrange"))
}

#[test]
fn view_prints_sample_views() {
    let output = twinrange().args(["view", "--id", "sampleMin"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sampleMin"]["low"]["value"], 15);
    assert_eq!(json["sampleMin"]["high"]["value"], 40);
    assert!(json.get("sample").is_none());
}

#[test]
fn view_unknown_id_fails() {
    let output = twinrange().args(["view", "--id", "nope"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn replay_reports_outcomes_and_changes() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "sample drag low 30").unwrap();
    writeln!(script, "sample type low 60").unwrap();
    writeln!(script, "sample enter low").unwrap();
    let path = script.path().to_str().unwrap().to_string();

    let output = twinrange().args(["replay", "--script", &path]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  change sample: 30..50"), "{stdout}");
    assert!(stdout.contains("line 3: sample Enter low -> rejected"), "{stdout}");
}

#[test]
fn replay_unknown_slider_fails() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "ghost drag low 3").unwrap();
    let path = script.path().to_str().unwrap().to_string();

    let output = twinrange().args(["replay", "--script", &path]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown slider \"ghost\""), "{stderr}");
}
