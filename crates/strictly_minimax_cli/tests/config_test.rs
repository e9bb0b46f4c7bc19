//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_minimax::{Mark, OpeningPolicy};
use strictly_minimax_cli::GameConfig;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "human_mark = \"O\"\nfirst_mark = \"X\"\nopening = \"search\"\nseed = 99"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(*config.first_mark(), Mark::X);
    assert_eq!(*config.opening(), OpeningPolicy::Search);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"Z\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeded_config_rng_is_reproducible() {
    use rand::Rng;
    let config = GameConfig::default().with_overrides(None, None, Some(3));
    let a: u64 = config.rng().random();
    let b: u64 = config.rng().random();
    assert_eq!(a, b);
}
