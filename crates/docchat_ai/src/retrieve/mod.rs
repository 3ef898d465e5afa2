use docchat_core::domain::Chunk;
use docchat_core::session::SessionStore;

mod tokenize;

pub use tokenize::{overlap, word_set};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredChunk<'a> {
    pub chunk: &'a Chunk,
    pub score: usize,
}

/// Score every chunk by distinct-word overlap with `query`, highest first.
/// Equal scores keep insertion order.
pub fn score_chunks<'a>(chunks: &'a [Chunk], query: &str) -> Vec<ScoredChunk<'a>> {
    let query_words = word_set(query);
    let mut scored: Vec<ScoredChunk<'a>> = chunks
        .iter()
        .map(|chunk| ScoredChunk {
            chunk,
            score: overlap(&query_words, &chunk.text),
        })
        .collect();
    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Up to `top_k` chunks with a positive score, best first.
pub fn rank_chunks(chunks: &[Chunk], query: &str, top_k: usize) -> Vec<Chunk> {
    score_chunks(chunks, query)
        .into_iter()
        .filter(|s| s.score > 0)
        .take(top_k)
        .map(|s| s.chunk.clone())
        .collect()
}

/// Rank a session's chunks against `query`. An empty result means no
/// relevant context, not an error.
pub fn rank(store: &SessionStore, session_id: &str, query: &str, top_k: usize) -> Vec<Chunk> {
    let snapshot = store.get(session_id);
    let hits = rank_chunks(&snapshot, query, top_k);
    tracing::debug!(
        session_id,
        candidates = snapshot.len(),
        hits = hits.len(),
        "ranked session chunks"
    );
    hits
}
