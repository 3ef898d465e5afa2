use std::collections::BTreeSet;
use std::sync::Arc;

use docchat_core::config::{ChunkingConfig, DocChatConfig, RetrievalConfig};
use docchat_core::domain::{ChatResponse, Chunk, UploadSummary};
use docchat_core::error::AppError;
use docchat_core::ingest::ingest_bytes;
use docchat_core::now_unix_millis;
use docchat_core::session::SessionStore;

use crate::llm::Generator;
use crate::retrieve::rank;

/// Separator line placed between chunks in a context block.
pub const CONTEXT_SEPARATOR: &str = "\n---\n";

pub const MISSING_KEY_ANSWER: &str = "Error: Backend API Key not configured. Please check server settings or enter key in frontend.";

/// Upload and chat entry points over one shared session store.
pub struct ChatEngine {
    store: Arc<SessionStore>,
    generator: Arc<dyn Generator>,
    chunking: ChunkingConfig,
    retrieval: RetrievalConfig,
}

impl ChatEngine {
    pub fn new(store: Arc<SessionStore>, generator: Arc<dyn Generator>, cfg: &DocChatConfig) -> Self {
        Self {
            store,
            generator,
            chunking: cfg.chunking,
            retrieval: cfg.retrieval,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn upload(&self, session_id: &str, filename: &str, bytes: &[u8]) -> UploadSummary {
        ingest_bytes(&self.store, session_id, filename, bytes, &self.chunking)
    }

    /// Answer `message` using the session's most relevant chunks.
    ///
    /// The generator is always called, with an empty context when nothing
    /// matched. Generator failures with a `GEN_*` code become the answer text;
    /// any other error is returned to the caller.
    pub fn answer(&self, session_id: &str, message: &str) -> Result<ChatResponse, AppError> {
        let hits = rank(&self.store, session_id, message, self.retrieval.top_k);
        let (context, sources) = build_context(&hits);

        let answer = match self.generator.generate(&context, message) {
            Ok(text) => text,
            Err(e) => match describe_generation_failure(&e) {
                Some(text) => {
                    tracing::warn!(session_id, code = %e.code, "generation failed; returning error text");
                    text
                }
                None => return Err(e),
            },
        };

        Ok(ChatResponse {
            answer,
            sources,
            timestamp: now_unix_millis(),
        })
    }
}

/// Join chunk texts with the separator line and collect distinct sources.
pub fn build_context(chunks: &[Chunk]) -> (String, BTreeSet<String>) {
    let context = chunks
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR);
    let sources = chunks.iter().map(|c| c.source.clone()).collect();
    (context, sources)
}

/// Answer text for an expected generator failure, `None` for anything else.
pub fn describe_generation_failure(err: &AppError) -> Option<String> {
    match err.code.as_str() {
        "GEN_NOT_CONFIGURED" => Some(MISSING_KEY_ANSWER.to_string()),
        "GEN_HTTP_STATUS" => Some(format!("API Error: {}", err.detail_or_message())),
        "GEN_TRANSPORT" | "GEN_TIMEOUT" | "GEN_DECODE" | "GEN_ENCODE_FAILED" => Some(format!(
            "Backend Communication Error: {}",
            err.detail_or_message()
        )),
        _ => None,
    }
}
