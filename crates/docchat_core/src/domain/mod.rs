use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A provenance-tagged window of a document's normalized text.
///
/// `start_char`/`end_char` are half-open offsets counted in characters (not
/// bytes) into the normalized text, so `end_char - start_char` always equals
/// `text.chars().count()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    pub source: String,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
}

impl Chunk {
    pub fn char_len(&self) -> usize {
        self.end_char - self.start_char
    }
}

/// Answer payload for one chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(rename = "response")]
    pub answer: String,
    pub sources: BTreeSet<String>,
    /// Milliseconds since the Unix epoch, captured after generation returned.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadSummary {
    pub status: String,
    pub file_id: String,
    pub chunks_count: usize,
    pub content_sha256: String,
}
