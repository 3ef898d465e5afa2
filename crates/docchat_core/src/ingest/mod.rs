use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::chunking::chunk_text;
use crate::config::ChunkingConfig;
use crate::domain::{Chunk, UploadSummary};
use crate::error::AppError;
use crate::extract::extract_text;
use crate::session::SessionStore;

/// Extract and chunk one document without touching any session.
pub fn process_document(filename: &str, bytes: &[u8], policy: &ChunkingConfig) -> Vec<Chunk> {
    let text = extract_text(filename, bytes);
    chunk_text(filename, &text, policy)
}

/// Upload path: extract, chunk and append to the session in one batch.
pub fn ingest_bytes(
    store: &SessionStore,
    session_id: &str,
    filename: &str,
    bytes: &[u8],
    policy: &ChunkingConfig,
) -> UploadSummary {
    let chunks = process_document(filename, bytes, policy);
    let chunks_count = chunks.len();
    let content_sha256 = hex::encode(Sha256::digest(bytes));

    store.add(session_id, chunks);
    tracing::info!(
        session_id,
        filename,
        chunks_count,
        content_sha256 = %content_sha256,
        "document ingested"
    );

    UploadSummary {
        status: "success".to_string(),
        file_id: filename.to_string(),
        chunks_count,
        content_sha256,
    }
}

/// Read a file from disk and ingest it under its file name.
pub fn ingest_path(
    store: &SessionStore,
    session_id: &str,
    path: &Path,
    policy: &ChunkingConfig,
) -> Result<UploadSummary, AppError> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AppError::new("INGEST_PATH_INVALID", "Document path has no usable file name")
                .with_details(format!("path={}", path.display()))
        })?;
    let bytes = fs::read(path).map_err(|e| {
        AppError::new("INGEST_READ_FAILED", "Failed to read document")
            .with_details(format!("path={}; err={}", path.display(), e))
    })?;
    Ok(ingest_bytes(store, session_id, filename, &bytes, policy))
}
