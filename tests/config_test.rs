//! Tests for loading play configuration from disk.

use std::io::Write;
use strictly_minimax::{PlayConfig, Player};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"").unwrap();
    writeln!(file, "show_stats = true").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human(), Player::O);
    assert_eq!(config.engine(), Player::X);
    assert!(*config.show_stats());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_invalid_player_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"Z\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
