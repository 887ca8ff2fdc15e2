//! Tests for loading `gocallgraph.toml` from disk.

use std::fs;

use gocallgraph_core::config::GraphConfig;
use gocallgraph_core::errors::ConfigError;
use tempfile::TempDir;

#[test]
fn load_reads_every_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gocallgraph.toml");
    fs::write(
        &path,
        r#"
[scan]
extensions = ["go", "gox"]
ignore_dirs = ["vendor"]
follow_symlinks = true
max_file_size = 4096
threads = 2

[export]
graph_name = "deps"
pretty_json = false
"#,
    )
    .unwrap();

    let config = GraphConfig::load(&path).unwrap();
    assert_eq!(config.scan.effective_extensions(), vec!["go", "gox"]);
    assert_eq!(config.scan.effective_ignore_dirs(), vec!["vendor"]);
    assert!(config.scan.effective_follow_symlinks());
    assert_eq!(config.scan.max_file_size, Some(4096));
    assert_eq!(config.scan.effective_threads(), 2);
    assert_eq!(config.export.effective_graph_name(), "deps");
    assert_eq!(config.export.effective_dot_binary(), "dot");
    assert!(!config.export.effective_pretty_json());
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = GraphConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn empty_graph_name_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gocallgraph.toml");
    fs::write(&path, "[export]\ngraph_name = \"  \"\n").unwrap();

    let err = GraphConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "export.graph_name"));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = GraphConfig::from_toml_str("[scan]\ncolor = \"blue\"\n", "inline").unwrap();
    assert_eq!(config, GraphConfig::default());
}
