pub mod chat;
pub mod deepseek;
pub mod llm;
pub mod retrieve;
