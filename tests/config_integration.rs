//! Integration tests for the gantt-config crate.

use std::fs;
use std::path::Path;

use gantt_config::session::resolve_from;
use gantt_config::{Config, ConfigError, ViewerConfig};
use gantt_protocol::{HeaderResolution, parse_timestamp};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gantt.json5");

    fs::write(
        &config_path,
        r##"
        {
            // Viewer settings for gantt
            viewer: {
                row_height: 2,
                track_width: 600.0,
                range: { start: "2023-06-01T09:00", end: "2023-06-27T13:00" },
                columns: ["task_name", "start"],
                header_resolution: "day",
                default_color: "#ff8800",
            },
            data_path: "tasks.json",
            session_token: "abc123",
        }
        "##,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.viewer.row_height, 2);
    assert_eq!(config.viewer.track_width, 600.0);
    let range = config.viewer.range.unwrap();
    assert_eq!(range.start(), parse_timestamp("2023-06-01T09:00").unwrap());
    assert_eq!(range.end(), parse_timestamp("2023-06-27T13:00").unwrap());
    assert_eq!(config.viewer.columns, vec!["task_name", "start"]);
    assert_eq!(config.viewer.header_resolution, HeaderResolution::Day);
    assert_eq!(config.viewer.default_color, "#ff8800");
    assert_eq!(config.data_path.as_deref(), Some(Path::new("tasks.json")));
    assert_eq!(config.session_token.as_deref(), Some("abc123"));
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        viewer: ViewerConfig {
            row_height: 3,
            columns: vec!["id".to_string()],
            ..Default::default()
        },
        data_path: Some("plan.json".into()),
        session_token: None,
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(loaded.viewer.row_height, 3);
    assert_eq!(loaded.viewer.columns, vec!["id"]);
    assert_eq!(loaded.viewer.track_width, original.viewer.track_width);
    assert_eq!(loaded.data_path, original.data_path);
    assert!(loaded.session_token.is_none());
}

#[test]
fn config_empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gantt.json5");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let defaults = ViewerConfig::default();

    assert_eq!(config.viewer.row_height, defaults.row_height);
    assert_eq!(config.viewer.columns, defaults.columns);
    assert!(config.viewer.range.is_none());
    assert!(config.data_path.is_none());
}

#[test]
fn config_rejects_degenerate_range() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gantt.json5");
    fs::write(
        &config_path,
        r#"{ viewer: { range: { start: "2023-06-27", end: "2023-06-01" } } }"#,
    )
    .unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5 { .. })));
}

#[test]
fn config_rejects_invalid_row_height() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gantt.json5");
    fs::write(&config_path, "{ viewer: { row_height: 0 } }").unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::InvalidRowHeight { .. })));
}

#[test]
fn config_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(dir.path().join("absent.json5"));
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn session_token_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gantt.json5");
    fs::write(&config_path, r#"{ session_token: "from-file" }"#).unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let session = resolve_from(None, None, config.session_token.as_deref());
    assert_eq!(session.token(), Some("from-file"));

    let session = resolve_from(Some("from-cli"), None, config.session_token.as_deref());
    assert_eq!(session.token(), Some("from-cli"));
}
