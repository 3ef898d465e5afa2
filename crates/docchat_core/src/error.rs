use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error shared by the ingest, retrieval and chat layers.
///
/// `code` is a stable SCREAMING_SNAKE identifier grouped by prefix
/// (`EXTRACT_`, `INGEST_`, `CONFIG_`, `GEN_`, `CHAT_`); callers branch on it
/// instead of on the human-readable `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Details when present, otherwise the message.
    pub fn detail_or_message(&self) -> &str {
        self.details.as_deref().unwrap_or(&self.message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details.as_deref() {
            Some(d) => write!(f, "[{}] {}: {}", self.code, self.message, d),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {}
