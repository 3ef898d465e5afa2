use std::fs;

use docchat_core::config::ChunkingConfig;
use docchat_core::error::AppError;
use docchat_core::ingest::{ingest_bytes, ingest_path, process_document};
use docchat_core::session::SessionStore;
use tempfile::tempdir;

fn document(len: usize) -> String {
    "lorem ipsum dolor sit amet ".chars().cycle().take(len).collect()
}

#[test]
fn upload_reports_summary_and_stores_chunks() {
    let store = SessionStore::new();
    let body = document(3000);
    let summary = ingest_bytes(&store, "s", "notes.txt", body.as_bytes(), &ChunkingConfig::default());

    assert_eq!(summary.status, "success");
    assert_eq!(summary.file_id, "notes.txt");
    assert_eq!(summary.chunks_count, store.chunk_count("s"));
    assert_eq!(summary.content_sha256.len(), 64);
    assert!(store.get("s").iter().all(|c| c.source == "notes.txt"));
}

#[test]
fn repeated_upload_doubles_chunk_count() {
    let store = SessionStore::new();
    let body = document(3000);
    let policy = ChunkingConfig::default();

    let first = ingest_bytes(&store, "s", "notes.txt", body.as_bytes(), &policy);
    let second = ingest_bytes(&store, "s", "notes.txt", body.as_bytes(), &policy);

    assert!(first.chunks_count > 0);
    assert_eq!(store.chunk_count("s"), first.chunks_count * 2);
    assert_eq!(first.content_sha256, second.content_sha256);
}

#[test]
fn whitespace_only_upload_adds_nothing() {
    let store = SessionStore::new();
    let summary = ingest_bytes(&store, "s", "blank.txt", b" \n\t \n", &ChunkingConfig::default());
    assert_eq!(summary.chunks_count, 0);
    assert!(store.get("s").is_empty());
}

#[test]
fn process_document_uses_normalized_offsets() {
    let chunks = process_document("a.txt", b"word\n\n\n\nword", &ChunkingConfig {
        window_chars: 1500,
        overlap_chars: 200,
        min_chunk_chars: 1,
    });
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "word word");
    assert_eq!((chunks[0].start_char, chunks[0].end_char), (0, 9));
}

#[test]
fn ingest_path_uses_file_name_as_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("handbook.md");
    fs::write(&path, document(200)).unwrap();

    let store = SessionStore::new();
    let summary = ingest_path(&store, "s", &path, &ChunkingConfig::default()).unwrap();
    assert_eq!(summary.file_id, "handbook.md");
    assert_eq!(store.get("s")[0].source, "handbook.md");
}

#[test]
fn ingest_path_reports_missing_file() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new();
    let err: AppError =
        ingest_path(&store, "s", &dir.path().join("missing.txt"), &ChunkingConfig::default())
            .unwrap_err();
    assert_eq!(err.code, "INGEST_READ_FAILED");
    assert_eq!(store.session_count(), 0);
}
