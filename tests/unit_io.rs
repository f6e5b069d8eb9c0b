// tests/unit_io.rs
//! Tests for loading model and metrics documents from disk.

use std::fs;
use std::path::Path;

use regroup_core::error::RegroupError;
use regroup_core::model::ProjectModel;
use regroup_core::vectors::MetricsTable;

#[test]
fn test_load_model_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(
        &path,
        r#"{
            "packages": ["app"],
            "classes": [{"name": "app.A", "package": "app"}],
            "methods": [{"name": "app.A.run()", "class": "app.A"}]
        }"#,
    )
    .unwrap();

    let model = ProjectModel::load(&path).unwrap();
    assert_eq!(model.classes.len(), 1);
    assert_eq!(model.owner_of("app.A.run()"), Some("app.A"));
}

#[test]
fn test_load_metrics_table_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    fs::write(&path, r#"{"class_metrics": {"dit": {"app.A": 1.0}}}"#).unwrap();

    let table = MetricsTable::load(&path).unwrap();
    assert_eq!(table.class_metrics["dit"]["app.A"], 1.0);
    assert!(table.method_metrics.is_empty());
}

#[test]
fn test_missing_file_reports_its_path() {
    let err = ProjectModel::load(Path::new("/no/such/model.json")).unwrap_err();
    match err {
        RegroupError::Io { path, .. } => {
            assert_eq!(path, Path::new("/no/such/model.json"));
        }
        other => panic!("expected an I/O error, got {other}"),
    }
}

#[test]
fn test_malformed_document_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ProjectModel::load(&path).unwrap_err();
    assert!(matches!(err, RegroupError::Json(_)));
}
