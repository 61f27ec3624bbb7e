use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("outliner.toml"));

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.source, "outline.md");
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn test_full_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "source = \"docs/Learning_Outline.md\"\nlog_filter = \"outliner=debug\"").unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.source, "docs/Learning_Outline.md");
    assert_eq!(cfg.log_filter, "outliner=debug");
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "source = \"notes.md\"").unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.source, "notes.md");
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "source = [this is not toml").unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}
