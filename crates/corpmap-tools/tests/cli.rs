//! Runs the compiled batch tools and checks their output and exit status.

use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LEGACY: &str = r#"{"companies": [
    {"name": "Acme", "location": "NYC", "coordinates": [40.7, -74.0], "website": "w", "linkedIn": "l", "workField": ["tech"]},
    {"name": "Globex", "location": "Toronto", "coordinates": [43.65, -79.38], "website": "", "linkedIn": "", "workField": []},
    {"name": "Acme", "location": "Boston", "coordinates": [42.36, -71.06], "website": "w2", "linkedIn": "l2", "workField": ["ai"]}
]}"#;

fn run(binary: &str, args: &[&Path], extra: &[&str], cwd: &Path) -> Output {
    Command::new(binary)
        .args(args)
        .args(extra)
        .current_dir(cwd)
        .output()
        .expect("failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_duplicates_reports_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.json");
    std::fs::write(&path, LEGACY).unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_check-duplicates"),
        &[path.as_path()],
        &[],
        temp_dir.path(),
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Duplicate companies found:\n  Acme:\n    - Location: NYC\n    - Location: Boston\n"
    );
}

#[test]
fn test_check_duplicates_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("companies.json");
    std::fs::write(&path, r#"{"companies": {"Acme": {"locations": []}}}"#).unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_check-duplicates"),
        &[path.as_path()],
        &[],
        temp_dir.path(),
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No duplicate companies found.\n");
}

#[test]
fn test_check_duplicates_uses_default_path() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("static")).unwrap();
    std::fs::write(
        temp_dir.path().join("static").join("companies.json"),
        r#"{"companies": {}}"#,
    )
    .unwrap();

    let output = run(env!("CARGO_BIN_EXE_check-duplicates"), &[], &[], temp_dir.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No duplicate companies found.\n");
}

#[test]
fn test_check_duplicates_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_check-duplicates"),
        &[temp_dir.path().join("missing.json").as_path()],
        &[],
        temp_dir.path(),
    );
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_migrate_companies_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("legacy.json");
    let output_path = temp_dir.path().join("out").join("companies.json");
    std::fs::write(&input, LEGACY).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_migrate-companies"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("Migrated 3 legacy records into 2 companies"));
    assert!(stdout(&output).contains("Warning: \"Acme\" appears 2 times"));

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(
        written["companies"]["Acme"],
        json!({
            "description": "",
            "locations": [{"Boston": [42.36, -71.06]}],
            "links": {"website": "w2", "linkedin": "l2"},
            "workFields": ["ai"]
        })
    );
}

#[test]
fn test_migrate_companies_strict_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("legacy.json");
    let output_path = temp_dir.path().join("companies.json");
    std::fs::write(&input, LEGACY).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_migrate-companies"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .arg("--strict")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Acme"));
    assert!(!output_path.exists());
}
