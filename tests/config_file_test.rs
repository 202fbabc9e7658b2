//! Tests for loading the terminal configuration from disk.

use std::io::Write;
use tictactoe_grid::TuiConfig;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title = \"Office Tournament\"").unwrap();
    writeln!(file, "poll_interval_ms = 250").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();

    assert_eq!(config.title(), "Office Tournament");
    assert_eq!(*config.poll_interval_ms(), 250);
    assert!(*config.show_cell_numbers());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
