use crate::config::{ConfigError, ReplayConfig, ReplayFileConfig, ReplayOptions};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn reads_all_keys() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("replay.toml");
    fs::write(
        &path,
        r#"
base_url = "https://staging.example.com"
log_file_path = "/var/log/nginx/access.log"
dry_run = true
include_timestamp = true
regex_exclude = "bot"
output_dir = "out"
timeout_secs = 10
"#,
    )
    .unwrap();

    // Act
    let file = ReplayFileConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(
        file,
        ReplayFileConfig {
            base_url: Some("https://staging.example.com".to_string()),
            log_file_path: Some(PathBuf::from("/var/log/nginx/access.log")),
            dry_run: Some(true),
            include_timestamp: Some(true),
            regex_filter: None,
            regex_exclude: Some("bot".to_string()),
            output_dir: Some(PathBuf::from("out")),
            timeout_secs: Some(10),
        }
    );
}

#[test]
fn command_line_wins_over_file() {
    // Arrange
    let cli = ReplayOptions {
        base_url: Some("https://prod.example.com".to_string()),
        ..Default::default()
    };
    let file = ReplayFileConfig {
        base_url: Some("https://staging.example.com".to_string()),
        log_file_path: Some(PathBuf::from("access.log")),
        dry_run: Some(true),
        ..Default::default()
    };

    // Act
    let config = ReplayConfig::try_from(cli.merge_file(file)).unwrap();

    // Assert
    assert_eq!(config.base_url, "https://prod.example.com");
    assert_eq!(config.log_file_path, PathBuf::from("access.log"));
    assert!(config.dry_run);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("replay.toml");
    fs::write(&path, "base_url = \"https://e.com\"\nretries = 3\n").unwrap();

    let err = ReplayFileConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = ReplayFileConfig::from_file(dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
