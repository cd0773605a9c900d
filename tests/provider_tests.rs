//! Integration tests for the TOML record provider and record assembly

use iaa_analytics::core::error::ProviderError;
use iaa_analytics::core::provider::{load_student, RecordProvider, TomlRecordProvider};
use std::fs;
use tempfile::TempDir;

fn write_record(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("record.toml");
    fs::write(&path, content).expect("Failed to write record");
    (temp_dir, path)
}

#[test]
fn test_load_sample_record() {
    let provider = TomlRecordProvider::load("samples/ana_souza.toml").expect("sample record");

    assert_eq!(provider.student_name().expect("name"), "Ana Souza");
    assert_eq!(provider.completed_courses().expect("completed").len(), 3);
    assert_eq!(provider.enrolled_courses().expect("enrolled").len(), 3);

    let published = provider
        .published_indexes()
        .expect("published")
        .expect("present");
    assert_eq!(published.iaa, "6.77");
}

#[test]
fn test_assembly_converts_credits_and_drops_zero_credit_rows() {
    let provider = TomlRecordProvider::load("samples/ana_souza.toml").expect("sample record");

    let (record, in_progress) = load_student(&provider, 18).expect("assembly");

    assert_eq!(record.completed.len(), 3);
    // The zero-credit registration CAD9999 never reaches the core
    assert_eq!(in_progress.len(), 2);
    assert_eq!(in_progress[0].name, "EEL5105");
    assert_eq!(in_progress[0].hours, 90);
    assert_eq!(in_progress[1].hours, 72);
}

#[test]
fn test_assembly_respects_configured_constant() {
    let provider = TomlRecordProvider::load("samples/ana_souza.toml").expect("sample record");

    let (_, in_progress) = load_student(&provider, 15).expect("assembly");

    assert_eq!(in_progress[0].hours, 75);
}

#[test]
fn test_missing_record_is_service_unavailable() {
    let (temp_dir, _) = write_record("student = \"Ana\"\n");
    let missing = temp_dir.path().join("nope.toml");

    let result = TomlRecordProvider::load(&missing);

    assert!(matches!(result, Err(ProviderError::ServiceUnavailable(_))));
}

#[test]
fn test_malformed_record_is_invalid() {
    let (_temp_dir, path) = write_record("student = [not toml");

    let result = TomlRecordProvider::load(&path);

    assert!(matches!(result, Err(ProviderError::InvalidRecord(_))));
}

#[test]
fn test_out_of_scale_grade_is_invalid() {
    let (_temp_dir, path) = write_record(
        r#"
student = "Ana Souza"

[[completed]]
hours = 60
grade = 11.0
"#,
    );

    let provider = TomlRecordProvider::load(&path).expect("parse");
    let result = load_student(&provider, 18);

    assert!(matches!(result, Err(ProviderError::InvalidRecord(_))));
}

#[test]
fn test_zero_hour_completed_course_is_invalid() {
    let (_temp_dir, path) = write_record(
        r#"
student = "Ana Souza"

[[completed]]
hours = 0
grade = 8.0
"#,
    );

    let provider = TomlRecordProvider::load(&path).expect("parse");
    let result = load_student(&provider, 18);

    assert!(matches!(result, Err(ProviderError::InvalidRecord(_))));
}

#[test]
fn test_record_without_published_indexes() {
    let (_temp_dir, path) = write_record(
        r#"
student = "Ana Souza"

[[completed]]
hours = 60
grade = 7.5
"#,
    );

    let provider = TomlRecordProvider::load(&path).expect("parse");
    let (record, in_progress) = load_student(&provider, 18).expect("assembly");

    assert!(record.published.is_none());
    assert!(in_progress.is_empty());
}
