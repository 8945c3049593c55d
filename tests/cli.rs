//! End-to-end checks of the `strudel-lint` binary.

use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("strudel-lint").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn lint_uses_configured_patterns_from_repo_root() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("strudel-lint.toml"), "patterns = [\"songs/*.strudel\"]\n").unwrap();
    fs::create_dir_all(root.join("songs")).unwrap();
    fs::write(root.join("songs/ok.strudel"), "s(\"bd sd\")\n").unwrap();
    fs::write(root.join("songs/bad.strudel"), "s(\"sine\")\n").unwrap();
    fs::write(root.join("ignored.strudel"), "eval(\"1\")\n").unwrap();

    let out = bin()
        .args(["lint", "--repo-root", root.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("songs/bad.strudel:1:1"));
    assert!(!stdout.contains("ignored.strudel"));
    assert!(stdout.contains("errors=1 warnings=0 files=2"));
}

#[test]
fn lint_json_output_and_deny_warnings() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("warm.strudel");
    fs::write(&file, "n(\"0\").s(\"saw\").room(0.9)\n").unwrap();

    let out = bin()
        .current_dir(dir.path())
        .args(["lint", "--output", "json", "warm.strudel"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["summary"]["warnings"], 1);
    assert_eq!(json["files"][0]["ok"], true);

    bin()
        .current_dir(dir.path())
        .args(["lint", "--deny-warnings", "warm.strudel"])
        .assert()
        .code(1);
}

#[test]
fn lint_reads_stdin() {
    bin()
        .args(["lint", "-"])
        .write_stdin("x.lpf(100)\n")
        .assert()
        .success();
}

#[test]
fn check_blocks_execution_with_error_reasons() {
    let out = bin()
        .args(["check", "-"])
        .write_stdin("s(\"bd\")\nwindow.alert(1)\n")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("Code validation failed:\nLine 2: Potentially unsafe code"));
}

#[test]
fn check_publish_clean_prints_no_issues() {
    let out = bin()
        .args(["check", "--publish", "-"])
        .write_stdin("s(\"hh*8\")\n")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "No issues found.");
}

#[test]
fn unreadable_file_is_reported_alongside_others() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.strudel"), "s(\"triangle\")\n").unwrap();
    fs::write(dir.path().join("raw.strudel"), [0xff, 0xfe, 0x00]).unwrap();
    let out = bin()
        .current_dir(dir.path())
        .args(["lint", "*.strudel", "nope.strudel"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("good.strudel:1:1"));
    assert!(stdout.contains("raw.strudel:1:1 — File could not be read"));
    assert!(stdout.contains("nope.strudel:1:1 — File could not be read"));
    assert!(stdout.contains("errors=3 warnings=0 files=3"));
}

#[test]
fn rules_json_lists_catalog() {
    let out = bin().args(["rules", "--output", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["rules"].as_array().unwrap().len(), 7);
}
