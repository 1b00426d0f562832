use std::path::PathBuf;

use tempfile::TempDir;

use dropcars_core::config::AppConfig;
use dropcars_core::consts::{
    DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_VIEWER_HEIGHT,
    DEFAULT_VIEWER_WIDTH,
};
use dropcars_core::error::DropCarsError;
use dropcars_core::transform::ContentSize;

#[test]
fn test_default_config_values() {
    let config = AppConfig::default();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(
        config.viewer.content_size(),
        ContentSize::new(DEFAULT_VIEWER_WIDTH, DEFAULT_VIEWER_HEIGHT)
    );
    assert!(config.session.path.is_none());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
[api]
base_url = "http://localhost:8000"
timeout_secs = 5
"#,
    )
    .unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.viewer.width, DEFAULT_VIEWER_WIDTH);
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg/config.toml");

    let mut config = AppConfig::default();
    config.viewer.width = 640.0;
    config.viewer.height = 480.0;
    config.session.path = Some(PathBuf::from("/tmp/dropcars-session.toml"));
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.session_store().path(),
        std::path::Path::new("/tmp/dropcars-session.toml")
    );
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = AppConfig::load_or_default(Some(&missing)).unwrap_err();
    assert!(matches!(err, DropCarsError::Io(_)));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\ntimeout_secs = \"soon\"\n").unwrap();
    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, DropCarsError::ConfigParse(_)));
}

#[test]
fn test_to_toml_contains_sections() {
    let s = AppConfig::default().to_toml().unwrap();
    assert!(s.contains("[api]"), "got: {s}");
    assert!(s.contains("[viewer]"), "got: {s}");
}
