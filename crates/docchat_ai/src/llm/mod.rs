use docchat_core::error::AppError;

pub mod deepseek_llm;
pub mod prompts;

pub use deepseek_llm::DeepSeekLlm;

/// External text generation: turns a context block and a question into an answer.
///
/// Implementations report failures with `GEN_*` codes; the chat engine turns
/// those into answer text.
pub trait Generator: Send + Sync {
    fn generate(&self, context: &str, query: &str) -> Result<String, AppError>;
}
