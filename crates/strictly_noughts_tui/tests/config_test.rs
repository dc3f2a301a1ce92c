//! Tests for loading game configuration from TOML.

use std::io::Write;
use strictly_noughts_tui::{FirstMove, GameConfig};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
board_size = 2
first = "ai"
log_file = "custom.log"
log_filter = "debug,strictly_noughts=trace"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 2);
    assert_eq!(*config.first(), FirstMove::Ai);
    assert_eq!(config.log_file().to_str(), Some("custom.log"));
    assert_eq!(config.log_filter(), "debug,strictly_noughts=trace");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"first = "human""#).unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 3);
    assert_eq!(*config.first(), FirstMove::Human);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_oversized_board_loads_but_fails_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 4").unwrap();

    // headless queries never read board_size, so loading succeeds
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 4);

    let err = config.validate().unwrap_err();
    assert!(err.message.contains("board_size"), "{err}");
}

#[test]
fn test_malformed_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = \"three\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
