use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocChatConfig {
    pub chunking: ChunkingConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

/// Sliding-window policy used by the chunker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChunkingConfig {
    pub window_chars: usize,
    pub overlap_chars: usize,
    /// Windows shorter than this after clipping are dropped.
    pub min_chunk_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            window_chars: 1500,
            overlap_chars: 200,
            min_chunk_chars: 50,
        }
    }
}

impl ChunkingConfig {
    pub fn stride(&self) -> usize {
        self.window_chars.saturating_sub(self.overlap_chars).max(1)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.deepseek.com/chat/completions".to_string(),
            model: "deepseek-chat".to_string(),
            api_key: None,
            timeout_secs: 30,
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DocChatConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        let cfg: DocChatConfig = toml::from_str(raw).map_err(|e| {
            AppError::new("CONFIG_PARSE_FAILED", "Failed to parse config TOML")
                .with_details(e.to_string())
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::new("CONFIG_READ_FAILED", "Failed to read config file")
                .with_details(format!("path={}; err={}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Take the API key from the environment when it is set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.generation.api_key = Some(key);
            }
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let c = &self.chunking;
        if c.window_chars == 0 {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "chunking.window_chars must be greater than zero",
            ));
        }
        if c.overlap_chars >= c.window_chars {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "chunking.overlap_chars must be smaller than chunking.window_chars",
            )
            .with_details(format!(
                "window_chars={}; overlap_chars={}",
                c.window_chars, c.overlap_chars
            )));
        }
        if self.retrieval.top_k == 0 {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "retrieval.top_k must be greater than zero",
            ));
        }
        if self.generation.timeout_secs == 0 {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "generation.timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}
