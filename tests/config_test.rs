//! Tests for loading configuration files.

use perfect_tictactoe::AppConfig;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_from_file_reads_all_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_filter = "perfect_tictactoe=debug"

[server]
host = "0.0.0.0"
port = 9000

[scores]
endpoint = "http://scores.local/scores"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "perfect_tictactoe=debug");
    assert_eq!(config.server().host(), "0.0.0.0");
    assert_eq!(config.server().port(), 9000);
    assert_eq!(
        config.scores().endpoint().as_deref(),
        Some("http://scores.local/scores")
    );
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.server().host(), "127.0.0.1");
    assert_eq!(config.server().port(), 3000);
}

#[test]
fn test_load_rejects_broken_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[server\nport = 1").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_from_file_missing_is_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
