//! Integration tests for duplicate detection over both file shapes.

use corpmap_core::duplicates::{check_file, find_duplicates, ArrayEntry, ArrayRecords};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_current_file_without_duplicates() {
    let report = check_file(&fixture("companies.json")).unwrap();
    assert_eq!(report.records_checked, 2);
    assert_eq!(report.to_string(), "No duplicate companies found.");
}

#[test]
fn test_legacy_file_with_duplicates() {
    let report = check_file(&fixture("companies-legacy-duplicates.json")).unwrap();
    assert_eq!(
        report.to_string(),
        "Duplicate companies found:\n  Northwind Robotics:\n    - Location: Waterloo, ON\n    - Location: Montreal, QC"
    );
}

#[test]
fn test_hand_edited_file_with_repeated_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("companies.json");
    std::fs::write(
        &path,
        r#"{"companies": {
            "Maple Quantum": {"locations": [{"Vancouver, BC": [49.2827, -123.1207]}]},
            "Northwind Robotics": {"locations": []},
            "Maple Quantum": {"locations": [{"Victoria, BC": [48.4284, -123.3656]}]}
        }}"#,
    )
    .unwrap();

    let report = check_file(&path).unwrap();
    assert_eq!(report.groups.len(), 1);
    assert_eq!(
        report.group("Maple Quantum").unwrap().details,
        vec![
            r#"Locations: [{"Vancouver, BC":[49.2827,-123.1207]}]"#,
            r#"Locations: [{"Victoria, BC":[48.4284,-123.3656]}]"#,
        ]
    );
}

#[test]
fn test_report_count_matches_occurrences() {
    // Name i occurs (i % 4) + 1 times.
    let mut entries = Vec::new();
    for i in 0..12 {
        for copy in 0..(i % 4) + 1 {
            entries.push(ArrayEntry {
                name: format!("Company {}", i),
                location: Some(format!("Office {}", copy)),
                locations: None,
            });
        }
    }
    let records = ArrayRecords { entries };

    let report = find_duplicates(&records);
    for i in 0..12 {
        let name = format!("Company {}", i);
        let occurrences = (i % 4) + 1;
        match report.group(&name) {
            Some(group) => {
                assert!(occurrences >= 2, "{} reported with one occurrence", name);
                assert_eq!(group.details.len(), occurrences);
            }
            None => assert_eq!(occurrences, 1, "{} missing from report", name),
        }
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = check_file(&temp_dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let err = check_file(&path).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("broken.json"));
}
