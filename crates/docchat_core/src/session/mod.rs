use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::Chunk;

/// Immutable view of a session's chunks at the time of the read.
pub type SessionSnapshot = Arc<Vec<Chunk>>;

/// Process-scoped, in-memory chunk store keyed by session id.
///
/// Each session holds an `Arc` snapshot that is replaced copy-on-write under
/// the map's shard lock, so a batch append is visible either entirely or not
/// at all and readers never hold a lock while they rank.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionSnapshot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch, creating the session if needed. No deduplication.
    pub fn add(&self, session_id: &str, chunks: Vec<Chunk>) {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        if chunks.is_empty() {
            return;
        }
        Arc::make_mut(entry.value_mut()).extend(chunks);
    }

    /// Chunks in insertion order; empty for unknown sessions.
    pub fn get(&self, session_id: &str) -> SessionSnapshot {
        self.sessions
            .get(session_id)
            .map(|s| Arc::clone(s.value()))
            .unwrap_or_default()
    }

    pub fn chunk_count(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map(|s| s.len()).unwrap_or(0)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
