use super::*;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.table.column_width, DEFAULT_COLUMN_WIDTH);
    assert_eq!(config.table.row_height, DEFAULT_ROW_HEIGHT);
    assert_eq!(config.table.header_height, DEFAULT_HEADER_HEIGHT);
    assert_eq!(config.capture.poll_interval_ms, DEFAULT_CAPTURE_POLL_INTERVAL_MS);
    assert_eq!(config.capture.timeout_ms, None);
    assert!(config.window_denylist.is_empty());
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_table_config_keeps_other_defaults() {
    let config: Config = serde_json::from_str(r#"{"table": {"rowHeight": 30}}"#).unwrap();
    assert_eq!(config.table.row_height, 30.0);
    assert_eq!(config.table.column_width, DEFAULT_COLUMN_WIDTH);
    assert_eq!(config.table.header_height, DEFAULT_HEADER_HEIGHT);
}

#[test]
fn test_capture_config_durations() {
    let config: Config =
        serde_json::from_str(r#"{"capture": {"pollIntervalMs": 0, "timeoutMs": 1500}}"#).unwrap();
    // Zero would spin; clamp to a millisecond
    assert_eq!(config.capture.poll_interval(), Duration::from_millis(1));
    assert_eq!(config.capture.timeout(), Some(Duration::from_millis(1500)));
}

#[test]
fn test_window_denylist_always_contains_builtins() {
    let config: Config = serde_json::from_str(
        r#"{"windowDenylist": ["Task Switching", "Program Manager"]}"#,
    )
    .unwrap();
    let denylist = config.window_denylist();

    for builtin in BUILTIN_WINDOW_DENYLIST {
        assert!(denylist.iter().any(|t| t == builtin), "missing {}", builtin);
    }
    assert!(denylist.contains(&"Task Switching".to_string()));
    // No duplicate for a title that is already built in
    assert_eq!(
        denylist.iter().filter(|t| *t == "Program Manager").count(),
        1
    );
    assert_eq!(denylist[0], crate::APP_TITLE);
}

#[test]
fn test_config_serialization_skips_empty_fields() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert!(!json.contains("windowDenylist"));
    assert!(!json.contains("timeoutMs"));
    assert!(json.contains("pollIntervalMs"));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"table": {{"columnWidth": 120}}, "windowDenylist": ["Foo"]}}"#).unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.table.column_width, 120.0);
    assert_eq!(config.window_denylist, vec!["Foo".to_string()]);
}

#[test]
fn test_load_config_from_malformed_file_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{ not json").unwrap();

    let err = load_config_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("parsing"));
}

#[test]
fn test_load_config_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("reading"));
}

#[test]
fn test_load_config_rejects_non_positive_geometry() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"table": {{"rowHeight": 0}}}}"#).unwrap();

    let err = load_config_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("validating"));
    let root = err.root_cause().to_string();
    assert!(root.contains("table.rowHeight"), "unexpected cause: {root}");
}
