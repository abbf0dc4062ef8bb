//! Loading record files from disk.

use std::fs;

use super::common::{create_temp_dir, sample_records, write_records_file};
use seekr::{load_records, RecordError};

#[test]
fn test_sample_catalogue_survives_a_file_round_trip() {
    let dir = create_temp_dir();
    let path = write_records_file(&dir, &sample_records());
    assert_eq!(load_records(&path).unwrap(), sample_records());
}

#[test]
fn test_hand_written_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[
            {"id": "t-1", "name": "Paris weekend", "status": "published"},
            {"id": "t-2", "name": "Moscow parks", "tags": "city, parks"}
        ]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].field("tags"), Some("city, parks"));
    assert_eq!(records[1].field("status"), None);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = create_temp_dir();
    let err = load_records(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RecordError::Io(_)), "{err}");
}

#[test]
fn test_malformed_json_is_reported() {
    let dir = create_temp_dir();
    let path = dir.path().join("records.json");
    fs::write(&path, "[{\"id\": ").unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, RecordError::Json(_)), "{err}");
    assert!(err.to_string().starts_with("malformed records JSON"));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let dir = create_temp_dir();
    let path = dir.path().join("records.json");
    fs::write(&path, r#"[{"id": "x"}, {"id": "y"}, {"id": "x"}]"#).unwrap();
    let err = load_records(&path).unwrap_err();
    assert_eq!(err.to_string(), "duplicate record id \"x\"");
}
