use std::fs;

use docchat_core::config::DocChatConfig;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = DocChatConfig::from_toml_str(
        r#"
[retrieval]
top_k = 3

[generation]
model = "deepseek-reasoner"
"#,
    )
    .unwrap();
    assert_eq!(cfg.retrieval.top_k, 3);
    assert_eq!(cfg.generation.model, "deepseek-reasoner");
    assert_eq!(cfg.generation.timeout_secs, 30);
    assert_eq!(cfg.chunking, DocChatConfig::default().chunking);
}

#[test]
fn overlap_must_be_smaller_than_window() {
    let err = DocChatConfig::from_toml_str(
        r#"
[chunking]
window_chars = 100
overlap_chars = 100
"#,
    )
    .unwrap_err();
    assert_eq!(err.code, "CONFIG_INVALID");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = DocChatConfig::from_toml_str("retrieval = [").unwrap_err();
    assert_eq!(err.code, "CONFIG_PARSE_FAILED");
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docchat.toml");
    fs::write(&path, "[generation]\ntimeout_secs = 5\n").unwrap();
    let cfg = DocChatConfig::load(&path).unwrap();
    assert_eq!(cfg.generation.timeout_secs, 5);

    let err = DocChatConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert_eq!(err.code, "CONFIG_READ_FAILED");
}
